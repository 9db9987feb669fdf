//! Health probe endpoints.
//!
//! Probes hit `/` or `/health` every few seconds; they are answered
//! locally and never touch the backend, so liveness checks succeed even
//! while the backend is down or still starting.

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Router;

/// Immediate liveness answer: `200`, plain text, body `OK`.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/plain")], "OK")
}

/// Router that answers every path and every method with the health
/// response. Used by the standalone health-check binary.
pub fn health_only_router() -> Router {
    Router::new().fallback(health)
}
