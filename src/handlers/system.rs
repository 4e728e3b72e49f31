use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::middleware::ResourceKind;

/// GET / - service name, version and entry points
pub async fn root() -> Json<Value> {
    let endpoints: Vec<String> = ResourceKind::ALL
        .iter()
        .map(|kind| format!("/{}/", kind.segment()))
        .collect();

    Json(json!({
        "name": "Portfolio API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": endpoints,
        "token": ["/token/", "/token/refresh/"],
    }))
}

/// GET /health - 503 when the database does not answer
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.store.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "database": "unavailable"
                })),
            )
        }
    }
}
