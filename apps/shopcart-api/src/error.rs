//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in ShopCart                               │
//! │                                                                         │
//! │  Handler                                                                │
//! │  Result<T, ApiError>                                                    │
//! │         │                                                               │
//! │         ├── JSON rejection ──────────────┐                              │
//! │         │                                ▼                              │
//! │         ├── CartError::Validation ──► ApiError(InvalidPayload) ──► 400  │
//! │         │                                                               │
//! │         ├── CartError::EmptyCart ───► ApiError(NotFound) ───────► 404  │
//! │         │                                                               │
//! │         └── Success ───────────────────────────────────────────► 2xx   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Bodies are plain text. A 404 carries no body at all.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shopcart_core::{CartError, INVALID_PAYLOAD_MESSAGE};
use tracing::warn;

/// API error returned from handlers.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// Machine-readable error code, decides the status
    pub code: ErrorCode,

    /// Response body
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Request body missing, malformed, or rejected by validation (400)
    InvalidPayload,

    /// Cart is empty (404)
    NotFound,
}

impl ErrorCode {
    /// HTTP status for this code.
    pub fn status(&self) -> StatusCode {
        match self {
            ErrorCode::InvalidPayload => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// The fixed 400 response for rejected add requests.
    pub fn invalid_payload() -> Self {
        ApiError::new(ErrorCode::InvalidPayload, INVALID_PAYLOAD_MESSAGE)
    }

    /// A 404 with an empty body.
    pub fn not_found() -> Self {
        ApiError::new(ErrorCode::NotFound, String::new())
    }
}

/// Converts cart errors to API errors.
impl From<CartError> for ApiError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::EmptyCart => ApiError::not_found(),
            CartError::Validation(_) => ApiError::invalid_payload(),
        }
    }
}

/// Body that could not be read as a line item.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(reason = %rejection.body_text(), "Rejected request payload");
        ApiError::invalid_payload()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.code.status();
        if self.message.is_empty() {
            status.into_response()
        } else {
            (status, self.message).into_response()
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
