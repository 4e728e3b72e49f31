use axum::extract::State;

use super::Resource;
use crate::app::AppState;
use crate::middleware::{ApiResponse, ApiResult};

/// GET /{entity}/ - every row, ordered by id
pub async fn list<R: Resource>(State(state): State<AppState>) -> ApiResult<Vec<R::Record>> {
    let records = R::list(&state.store).await?;
    tracing::debug!("Listed {} {}", records.len(), R::KIND.segment());
    Ok(ApiResponse::success(records))
}
