//! Error types for the core and the HTTP layer.
//!
//! [`CoreError`] is what the link service returns; [`AppError`] is its HTTP
//! rendering. Handlers return `Result<_, AppError>` and rely on `?` to convert.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Failures produced by short link creation and resolution.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The submitted URL is empty or otherwise unacceptable.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The system entropy source could not supply random bytes.
    #[error("random source unavailable: {0}")]
    RandomSource(String),

    /// No entry is bound to the requested id.
    #[error("short link not found: {0}")]
    NotFound(String),
}

/// JSON body written for every error response.
///
/// ```json
/// { "message": "URL not found", "code": 404, "status": "Not Found" }
/// ```
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorInfo {
    pub message: String,
    pub code: u16,
    pub status: String,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds the serializable body for this error.
    pub fn to_error_info(&self) -> ErrorInfo {
        let status = self.status_code();
        let message = match self {
            AppError::Validation { message }
            | AppError::NotFound { message }
            | AppError::Internal { message } => message.clone(),
        };

        ErrorInfo {
            message,
            code: status.as_u16(),
            status: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let info = self.to_error_info();
        write!(f, "{} ({} {})", info.message, info.code, info.status)
    }
}

impl std::error::Error for AppError {}

/// Maps core failures onto the public error messages.
///
/// Internal details (e.g. the entropy source error) are logged, not returned.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidInput(_) => AppError::bad_request("Invalid request body"),
            CoreError::RandomSource(reason) => {
                tracing::error!("ID generation failed: {}", reason);
                AppError::internal("Error generating URL ID")
            }
            CoreError::NotFound(_) => AppError::not_found("URL not found"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_error_info())).into_response()
    }
}
