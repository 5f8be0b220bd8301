//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use event_common::AppError;
use event_core::DomainError;
use std::fmt;
use validator::ValidationErrors;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain failure (validation, business rule, not found, authorization, port)
    Domain(DomainError),

    /// Request rejected before reaching the domain
    Validation(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

impl ServiceError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Get the wrapped domain error, if any
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(e) => Some(e),
            Self::Validation(_) => None,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => AppError::Domain(e.clone()).status_code(),
            Self::Validation(_) => 400,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Domain(e) => e.code(),
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(err: ValidationErrors) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
