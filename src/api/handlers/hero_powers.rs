//! Hero power creation.
//!
//! The strength is validated before the store is touched; hero and power ids
//! are checked inside the insert transaction and reported as `404`.

use axum::{
    Json,
    extract::{Extension, rejection::JsonRejection},
};
use serde::Deserialize;
use tracing::{info, instrument};
use utoipa::ToSchema;

use super::{ApiError, ErrorResponse, JsonBody, ValidationErrorResponse, read_json};
use crate::roster::{Store, models::NewHeroPower, repo, serialize::HeroPowerDetail};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateHeroPowerRequest {
    /// One of `Strong`, `Weak`, `Average`.
    pub strength: String,
    pub hero_id: i64,
    pub power_id: i64,
}

#[utoipa::path(
    post,
    path = "/hero_powers",
    request_body = CreateHeroPowerRequest,
    responses(
        (status = 200, description = "Hero power created.", body = HeroPowerDetail),
        (status = 400, description = "Body is not JSON, or the strength or ids are invalid.", body = ValidationErrorResponse),
        (status = 404, description = "Hero or power not found.", body = ErrorResponse),
    ),
    tag = "hero_powers"
)]
#[instrument(skip_all)]
pub async fn create_hero_power(
    store: Extension<Store>,
    payload: Result<Json<CreateHeroPowerRequest>, JsonRejection>,
) -> Result<Json<HeroPowerDetail>, ApiError> {
    let JsonBody::Parsed(request) = read_json(payload)? else {
        return Err(ApiError::Validation);
    };

    let hero_power = NewHeroPower::create(&request.strength, request.hero_id, request.power_id)?;

    let created = repo::insert_hero_power(&store, hero_power).await?;
    info!(
        hero_power_id = created.id,
        hero_id = created.hero_id,
        power_id = created.power_id,
        "Created hero power"
    );

    Ok(Json(created))
}
