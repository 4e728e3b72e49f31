use axum::extract::{rejection::PathRejection, Path, State};

use super::Resource;
use crate::app::AppState;
use crate::middleware::{ApiResponse, ApiResult};

/// DELETE /{entity}/{id}/ - cascades run in the store
pub async fn destroy<R: Resource>(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<()> {
    let Path(id) = id?;
    R::delete(&state.store, id).await?;
    tracing::info!("Deleted {} {}", R::KIND.segment(), id);
    Ok(ApiResponse::no_content())
}
