//! Response types and error handling for API endpoints
//!
//! Every failure is rendered as `{"error": "<message>"}` with a fixed,
//! client-safe message. Server-side detail goes to the log only.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use board_common::ErrorResponse;
use board_service::ServiceError;
use thiserror::Error;
use tracing::{error, warn};
use validator::ValidationErrors;

/// Message for bodies that are not valid JSON (or not the expected shape)
pub const INVALID_JSON_BODY: &str = "Invalid JSON body";

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid JSON body")]
    InvalidJson,

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("{0}")]
    Service(#[from] ServiceError),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidJson | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Service(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }

    /// Get error code for logs
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::InvalidJson => "INVALID_JSON",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Service(e) => e.error_code(),
        }
    }

    /// The message placed in the response body
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::InvalidJson => INVALID_JSON_BODY.to_string(),
            Self::Validation(errors) => first_validation_message(errors),
            Self::Service(e) => e.public_message().to_string(),
        }
    }
}

fn first_validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(ToString::to_string))
        .unwrap_or_else(|| "Invalid request".to_string())
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.public_message();

        if status.is_server_error() {
            error!(error = ?self, code = self.error_code(), "Server error occurred");
        } else {
            warn!(code = self.error_code(), message = %message, "Request rejected");
        }

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Created response (201) with JSON body
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}
