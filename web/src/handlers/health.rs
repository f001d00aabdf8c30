//! Liveness endpoint. Does not contact the backend.

use axum::http::StatusCode;

/// `GET /health`
#[allow(clippy::unused_async)]
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}
