//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use bridge_common::AppError;
use bridge_core::traits::LookupError;
use bridge_core::DomainError;
use std::fmt;
use validator::ValidationErrors;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Storage or domain rule failure
    Domain(DomainError),

    /// The player name could not be resolved; nothing was written
    ResolutionFailed(LookupError),

    /// Command input rejected before any external call
    Validation(String),

    /// The link changed under us on both attempts
    Conflict(String),

    /// Internal error
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::ResolutionFailed(e) => write!(f, "Resolution failed: {e}"),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
            Self::Conflict(msg) => write!(f, "Conflict: {msg}"),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::ResolutionFailed(e) => Some(e),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a conflict error
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Check if the store rejected the operation or could not be reached
    pub fn is_storage_failure(&self) -> bool {
        matches!(self, Self::Domain(e) if e.is_storage())
    }

    /// Get the error code for logs and replies
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::ResolutionFailed(LookupError::NotFound(_)) => "UNKNOWN_ACCOUNT",
            Self::ResolutionFailed(_) => "LOOKUP_FAILED",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<LookupError> for ServiceError {
    fn from(err: LookupError) -> Self {
        Self::ResolutionFailed(err)
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
            ServiceError::ResolutionFailed(e) => AppError::ExternalService(e.to_string()),
            ServiceError::Validation(msg) => AppError::InvalidInput(msg),
            ServiceError::Conflict(msg) | ServiceError::Internal(msg) => {
                AppError::Internal(anyhow::anyhow!(msg))
            }
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
