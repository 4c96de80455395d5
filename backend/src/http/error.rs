//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::services::ServiceError;

/// API error response body: `{ "error": "..." }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Generic message for failures without a more specific one.
pub const INTERNAL_ERROR: &str = "Internal server error";

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (validation error). The message is shown as is.
    BadRequest(String),
    /// The backend failed. Only `message` reaches the client; `source` is
    /// logged.
    Backend {
        message: &'static str,
        source: ServiceError,
    },
}

impl AppError {
    /// Classify a service failure, using `backend_message` for 500 responses.
    pub fn from_service(err: ServiceError, backend_message: &'static str) -> Self {
        if err.is_validation() {
            AppError::BadRequest(err.to_string())
        } else {
            AppError::Backend {
                message: backend_message,
                source: err,
            }
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        AppError::from_service(err, INTERNAL_ERROR)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ApiError::new(msg)),
            AppError::Backend { message, source } => {
                error!(error = %source, "{}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, ApiError::new(message))
            }
        };

        (status, Json(body)).into_response()
    }
}
