//! Hero endpoints.

use axum::{
    Json,
    extract::{Extension, Path, rejection::PathRejection},
    http::StatusCode,
};
use tracing::{debug, info, instrument};

use super::{ApiError, ErrorResponse};
use crate::roster::{
    Entity, Store, repo,
    serialize::{HeroDetail, HeroSummary, serialize_hero_summary},
};

#[utoipa::path(
    get,
    path = "/heroes",
    responses(
        (status = 200, description = "All heroes, without their powers.", body = [HeroSummary]),
    ),
    tag = "heroes"
)]
#[instrument(skip(store))]
pub async fn list_heroes(store: Extension<Store>) -> Result<Json<Vec<HeroSummary>>, ApiError> {
    let heroes = repo::list_heroes(&store).await?;
    debug!("Listing {} heroes", heroes.len());
    Ok(Json(heroes.iter().map(serialize_hero_summary).collect()))
}

#[utoipa::path(
    get,
    path = "/heroes/{id}",
    params(("id" = i64, Path, description = "Hero id")),
    responses(
        (status = 200, description = "Hero with its hero powers and their powers.", body = HeroDetail),
        (status = 404, description = "Hero not found.", body = ErrorResponse),
    ),
    tag = "heroes"
)]
#[instrument(skip_all)]
pub async fn get_hero(
    id: Result<Path<i64>, PathRejection>,
    store: Extension<Store>,
) -> Result<Json<HeroDetail>, ApiError> {
    let Ok(Path(id)) = id else {
        return Err(ApiError::NotFound(Entity::Hero));
    };
    Ok(Json(repo::hero_detail(&store, id).await?))
}

#[utoipa::path(
    delete,
    path = "/heroes/{id}",
    params(("id" = i64, Path, description = "Hero id")),
    responses(
        (status = 204, description = "Hero and its hero powers deleted."),
        (status = 404, description = "Hero not found.", body = ErrorResponse),
    ),
    tag = "heroes"
)]
#[instrument(skip_all)]
pub async fn delete_hero(
    id: Result<Path<i64>, PathRejection>,
    store: Extension<Store>,
) -> Result<StatusCode, ApiError> {
    let Ok(Path(id)) = id else {
        return Err(ApiError::NotFound(Entity::Hero));
    };
    if repo::delete_hero(&store, id).await? {
        info!(hero_id = id, "Deleted hero");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(Entity::Hero))
    }
}
