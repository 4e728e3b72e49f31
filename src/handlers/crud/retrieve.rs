use axum::extract::{rejection::PathRejection, Path, State};

use super::Resource;
use crate::app::AppState;
use crate::middleware::{ApiResponse, ApiResult};

/// GET /{entity}/{id}/
pub async fn retrieve<R: Resource>(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<R::Record> {
    let Path(id) = id?;
    let record = R::get(&state.store, id).await?;
    Ok(ApiResponse::success(record))
}
