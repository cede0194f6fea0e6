//! Health check endpoint.

use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// GET /health - liveness probe, no store access.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
