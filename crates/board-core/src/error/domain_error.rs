//! Domain errors - error types for the domain layer

use std::time::Duration;

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Store Errors (wrapped)
    // =========================================================================
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Decode error: {0}")]
    DecodeError(String),

    #[error("Store operation timed out after {0:?}")]
    Timeout(Duration),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            Self::DecodeError(_) => "DECODE_ERROR",
            Self::Timeout(_) => "STORE_TIMEOUT",
        }
    }

    /// Check if this is a row shape mismatch
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::DecodeError(_))
    }
}
