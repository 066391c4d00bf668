//! HTTP API errors.
//!
//! NotFound renders a bare 404 with no body. Storage failures render a 500
//! JSON envelope and leave the server running; a failing statement is never
//! fatal to the process.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::storage::StorageError;

/// Result type for contact handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Contact API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Requested contact id does not exist
    #[error("Contact not found")]
    NotFound,

    /// Storage backend failure
    #[error("{0}")]
    Storage(#[from] StorageError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body (5xx only; 404s carry no body)
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::NotFound => status.into_response(),
            ApiError::Storage(err) => {
                tracing::error!(error = %err, "storage failure while handling request");
                let body = ErrorResponse {
                    error: err.to_string(),
                    code: status.as_u16(),
                };
                (status, Json(body)).into_response()
            }
        }
    }
}
