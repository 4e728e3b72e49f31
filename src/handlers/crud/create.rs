use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};

use super::Resource;
use crate::api::WriteBody;
use crate::app::AppState;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

/// POST /{entity}/
pub async fn create<R: Resource>(
    State(state): State<AppState>,
    user: Option<Extension<AuthUser>>,
    body: Result<Json<R::Body>, JsonRejection>,
) -> ApiResult<R::Record> {
    let Json(body) = body?;
    body.check()?;

    let record = R::create(&state.store, body.into_create()).await?;
    tracing::info!(
        "Created {} {} by {}",
        R::KIND.segment(),
        R::id(&record),
        user.as_ref().map_or("anonymous", |Extension(u)| u.username.as_str())
    );

    Ok(ApiResponse::created(record))
}
