//! API error type and its HTTP mapping.
//!
//! Every error response uses the same envelope: a top-level `error` object
//! with a `message` string.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

use crate::types::errors::{StoreError, ValidationError};

/// Errors surfaced by the request handlers.
#[derive(Debug)]
pub enum ApiError {
    /// The request payload failed validation.
    Validation(ValidationError),
    /// The addressed bookmark does not exist.
    NotFound,
    /// The storage layer failed; detail is logged, never sent to the client.
    Storage(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(err) => write!(f, "{}", err),
            ApiError::NotFound => write!(f, "bookmark doesn't exist"),
            ApiError::Storage(msg) => write!(f, "storage failure: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "bookmark doesn't exist".to_string()),
            ApiError::Storage(detail) => {
                tracing::error!("storage failure: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": { "message": message }
        }));

        (status, body).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Database(msg) => ApiError::Storage(msg),
        }
    }
}
