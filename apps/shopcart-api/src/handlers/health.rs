//! Liveness endpoint.

use axum::response::IntoResponse;

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    "OK"
}
