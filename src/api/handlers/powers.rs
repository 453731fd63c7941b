//! Power endpoints.
//!
//! Only the description of a power can change. `PATCH` checks the body is
//! JSON first, then that the power exists, then the description rule.

use axum::{
    Json,
    extract::{
        Extension, Path,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use serde::Deserialize;
use tracing::{debug, info, instrument};
use utoipa::ToSchema;

use super::{ApiError, ErrorResponse, JsonBody, ValidationErrorResponse, read_json};
use crate::roster::{
    Entity, Store, repo,
    serialize::{PowerSummary, serialize_power},
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePowerRequest {
    /// New description, at least 20 characters.
    pub description: String,
}

#[utoipa::path(
    get,
    path = "/powers",
    responses(
        (status = 200, description = "All powers.", body = [PowerSummary]),
    ),
    tag = "powers"
)]
#[instrument(skip(store))]
pub async fn list_powers(store: Extension<Store>) -> Result<Json<Vec<PowerSummary>>, ApiError> {
    let powers = repo::list_powers(&store).await?;
    debug!("Listing {} powers", powers.len());
    Ok(Json(powers.iter().map(serialize_power).collect()))
}

#[utoipa::path(
    get,
    path = "/powers/{id}",
    params(("id" = i64, Path, description = "Power id")),
    responses(
        (status = 200, description = "The power.", body = PowerSummary),
        (status = 404, description = "Power not found.", body = ErrorResponse),
    ),
    tag = "powers"
)]
#[instrument(skip_all)]
pub async fn get_power(
    id: Result<Path<i64>, PathRejection>,
    store: Extension<Store>,
) -> Result<Json<PowerSummary>, ApiError> {
    let Ok(Path(id)) = id else {
        return Err(ApiError::NotFound(Entity::Power));
    };
    repo::find_power(&store, id)
        .await?
        .map(|power| Json(serialize_power(&power)))
        .ok_or(ApiError::NotFound(Entity::Power))
}

#[utoipa::path(
    patch,
    path = "/powers/{id}",
    request_body = UpdatePowerRequest,
    params(("id" = i64, Path, description = "Power id")),
    responses(
        (status = 200, description = "Power updated.", body = PowerSummary),
        (status = 400, description = "Body is not JSON, or the description is shorter than 20 characters.", body = ValidationErrorResponse),
        (status = 404, description = "Power not found.", body = ErrorResponse),
    ),
    tag = "powers"
)]
#[instrument(skip_all)]
pub async fn update_power(
    id: Result<Path<i64>, PathRejection>,
    store: Extension<Store>,
    payload: Result<Json<UpdatePowerRequest>, JsonRejection>,
) -> Result<Json<PowerSummary>, ApiError> {
    let body = read_json(payload)?;

    let Ok(Path(id)) = id else {
        return Err(ApiError::NotFound(Entity::Power));
    };

    let JsonBody::Parsed(request) = body else {
        // Unknown ids still win over a bad body.
        return match repo::find_power(&store, id).await? {
            Some(_) => Err(ApiError::Validation),
            None => Err(ApiError::NotFound(Entity::Power)),
        };
    };

    let power = repo::update_power_description(&store, id, request.description).await?;
    info!(power_id = power.id, "Updated power description");

    Ok(Json(serialize_power(&power)))
}

#[utoipa::path(
    delete,
    path = "/powers/{id}",
    params(("id" = i64, Path, description = "Power id")),
    responses(
        (status = 204, description = "Power and its hero powers deleted."),
        (status = 404, description = "Power not found.", body = ErrorResponse),
    ),
    tag = "powers"
)]
#[instrument(skip_all)]
pub async fn delete_power(
    id: Result<Path<i64>, PathRejection>,
    store: Extension<Store>,
) -> Result<StatusCode, ApiError> {
    let Ok(Path(id)) = id else {
        return Err(ApiError::NotFound(Entity::Power));
    };
    if repo::delete_power(&store, id).await? {
        info!(power_id = id, "Deleted power");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(Entity::Power))
    }
}
