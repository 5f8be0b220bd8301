//! Application error types
//!
//! Unified error handling at the edge of the application, where failures are
//! mapped onto transport responses.

use event_core::DomainError;
use serde::Serialize;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Status code for a domain error
fn domain_status(err: &DomainError) -> u16 {
    if err.is_not_found() {
        404
    } else if err.is_authorization() {
        403
    } else if err.is_validation() {
        400
    } else if matches!(err, DomainError::AlreadyRegistered(_)) {
        409
    } else if err.is_business_rule() {
        422
    } else if matches!(err, DomainError::LookupUnavailable(_)) {
        503
    } else {
        500
    }
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Domain(e) => domain_status(e),
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code())
    }
}

/// Error response structure for API responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        // Internal details stay in the logs
        let message = if err.is_server_error() {
            "Internal server error".to_string()
        } else {
            err.to_string()
        };

        Self {
            code: err.error_code().to_string(),
            message,
            details: None,
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        Self::from(&err)
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
