use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::auth::{Claims, TokenKeys, TokenType};
use crate::error::ApiError;

use super::policy::{self, Access, ResourceKind, Verb};

/// Caller identity taken from a verified access token
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: String,
    pub username: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            username: claims.username,
        }
    }
}

/// Middleware state: which resource the routes belong to and how to verify tokens
#[derive(Clone)]
pub struct Gate {
    pub resource: ResourceKind,
    pub tokens: Arc<TokenKeys>,
}

impl Gate {
    pub fn new(resource: ResourceKind, tokens: Arc<TokenKeys>) -> Self {
        Self { resource, tokens }
    }
}

/// Look up the policy for (resource, verb) and, when gated, require a valid
/// bearer access token before the handler runs.
pub async fn authorize(State(gate): State<Gate>, mut request: Request, next: Next) -> Result<Response, ApiError> {
    let verb = Verb::from_method(request.method());

    if policy::access(gate.resource, verb) == Access::Public {
        tracing::debug!("{} {} is public", request.method(), gate.resource.segment());
        return Ok(next.run(request).await);
    }

    let token = extract_bearer_token(request.headers()).map_err(|msg| {
        tracing::debug!("Rejected {} {}: {}", request.method(), gate.resource.segment(), msg);
        ApiError::unauthorized(msg)
    })?;

    let claims = gate.tokens.verify(&token, TokenType::Access)?;
    tracing::debug!("{} {} authorized for {}", request.method(), gate.resource.segment(), claims.username);

    request.extensions_mut().insert(AuthUser::from(claims));
    Ok(next.run(request).await)
}

/// Extract the token from `Authorization: Bearer <token>`
fn extract_bearer_token(headers: &HeaderMap) -> Result<String, &'static str> {
    let auth_header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or("Authentication credentials were not provided.")?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format")?;

    match auth_str.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
        Some(_) => Err("Invalid Authorization header. No credentials provided."),
        None => Err("Authorization header must use Bearer token format"),
    }
}
