use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};

use super::Resource;
use crate::api::WriteBody;
use crate::app::AppState;
use crate::middleware::{ApiResponse, ApiResult};

/// PUT /{entity}/{id}/ - every writable field must be present
pub async fn update<R: Resource>(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<R::Body>, JsonRejection>,
) -> ApiResult<R::Record> {
    let Path(id) = id?;
    // Unknown ids are 404 regardless of the body
    R::get(&state.store, id).await?;

    let Json(body) = body?;
    let body = body.for_update();
    body.check()?;

    let record = R::update(&state.store, id, body.into_update()).await?;
    tracing::info!("Updated {} {}", R::KIND.segment(), id);
    Ok(ApiResponse::success(record))
}

/// PATCH /{entity}/{id}/ - omitted fields keep their stored values
pub async fn partial_update<R: Resource>(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<R::Body>, JsonRejection>,
) -> ApiResult<R::Record> {
    let Path(id) = id?;
    let current = R::get(&state.store, id).await?;

    let Json(body) = body?;
    let merged = body.for_update().merge_over(&current);
    merged.check()?;

    let record = R::update(&state.store, id, merged.into_update()).await?;
    tracing::info!("Patched {} {}", R::KIND.segment(), id);
    Ok(ApiResponse::success(record))
}
