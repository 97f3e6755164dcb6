//! Error types for the cache debug server
//!
//! Provides unified error handling using thiserror.
//!
//! The cache itself never fails; absence is expressed as `None`. Errors only
//! arise at the HTTP boundary, for requests the server cannot act on.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Api Error Enum ==
/// Unified error type for the debug API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Flush request named a cache that does not exist
    #[error("Invalid cache target: {0}")]
    InvalidTarget(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidTarget(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(ErrorResponse::new(message));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the debug API.
pub type Result<T> = std::result::Result<T, ApiError>;
