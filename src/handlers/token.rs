use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::api::token::{AccessToken, RefreshRequest, TokenRequest};
use crate::api::validate_fields;
use crate::app::AppState;
use crate::auth::{password::verify_password, TokenPair};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

const BAD_CREDENTIALS: &str = "No active account found with the given credentials";

/// POST /token/ - exchange username/password for an access + refresh pair
pub async fn obtain(
    State(state): State<AppState>,
    body: Result<Json<TokenRequest>, JsonRejection>,
) -> ApiResult<TokenPair> {
    let Json(request) = body?;
    validate_fields(&request)?;

    let username = request.username.unwrap_or_default();
    let password = request.password.unwrap_or_default();

    let user = match state.store.find_user_by_username(&username).await? {
        Some(user) if user.is_active && verify_password(&password, &user.password_hash) => user,
        _ => {
            tracing::warn!("Failed token request for {}", username);
            return Err(ApiError::unauthorized(BAD_CREDENTIALS));
        }
    };

    let pair = state.tokens.issue_pair(&user)?;
    tracing::info!("Issued tokens for {}", user.username);
    Ok(ApiResponse::success(pair))
}

/// POST /token/refresh/ - mint a new access token from a refresh token
pub async fn refresh(
    State(state): State<AppState>,
    body: Result<Json<RefreshRequest>, JsonRejection>,
) -> ApiResult<AccessToken> {
    let Json(request) = body?;
    validate_fields(&request)?;

    let access = state.tokens.refresh(&request.refresh.unwrap_or_default())?;
    Ok(ApiResponse::success(AccessToken { access }))
}
