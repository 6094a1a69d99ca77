//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It
//! implements `axum::response::IntoResponse` to produce JSON error bodies
//! of the shape `{"detail": <message>}` with the appropriate status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Entity not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Request failed validation before reaching storage (422).
    #[error("validation error: {0}")]
    Validation(String),

    /// Unexpected storage or I/O failure (500). The detail carries the raw
    /// error text as a diagnostic convenience, not a stable contract.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        let body = serde_json::json!({ "detail": detail });
        (status, axum::Json(body)).into_response()
    }
}

impl From<toric_core::CoreError> for ApiError {
    fn from(err: toric_core::CoreError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<toric_storage::StorageError> for ApiError {
    fn from(err: toric_storage::StorageError) -> Self {
        ApiError::Internal(err.to_string())
    }
}
