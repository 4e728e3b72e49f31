use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::Html,
};

use crate::app::AppState;
use crate::error::ApiError;
use crate::render;

/// GET /profiles/{id}/ - HTML page instead of JSON; other verbs on the
/// route go through the generic handlers.
pub async fn show(State(state): State<AppState>, id: Result<Path<i64>, PathRejection>) -> Result<Html<String>, ApiError> {
    let Path(id) = id?;
    let detail = state.store.profile_detail(id).await?;
    tracing::debug!(
        "Rendering profile {} with {} projects and {} certificates",
        id,
        detail.projects.len(),
        detail.certificates.len()
    );
    Ok(Html(render::profile_page(&detail)))
}
