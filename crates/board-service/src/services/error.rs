//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use board_core::DomainError;
use std::fmt;

/// The use case a store failure happened in
///
/// Decides which generic message the client sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FetchComments,
    FetchReactions,
    CreateComment,
    RecordReaction,
}

impl Operation {
    /// Client-facing message for a failure during this operation
    pub fn failure_message(self, cause: &DomainError) -> &'static str {
        match self {
            Self::FetchComments if cause.is_decode() => "Failed to decode comments",
            Self::FetchComments => "Failed to fetch comments",
            Self::FetchReactions => "Failed to fetch reactions",
            Self::CreateComment => "Failed to create comment",
            Self::RecordReaction => "Failed to record reaction",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FetchComments => "fetch comments",
            Self::FetchReactions => "fetch reactions",
            Self::CreateComment => "create comment",
            Self::RecordReaction => "record reaction",
        };
        f.write_str(name)
    }
}

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Client supplied an incomplete request
    Validation(String),

    /// The store failed (or timed out) while performing an operation
    Store {
        operation: Operation,
        source: DomainError,
    },

    /// Internal error
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
            Self::Store { operation, source } => write!(f, "Failed to {operation}: {source}"),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Wrap a store failure with the operation it interrupted
    pub fn store(operation: Operation, source: DomainError) -> Self {
        match source {
            DomainError::ValidationError(msg) => Self::Validation(msg),
            source => Self::Store { operation, source },
        }
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Store { .. } | Self::Internal(_) => 500,
        }
    }

    /// Get the error code for logs
    pub fn error_code(&self) -> &str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Store { source, .. } => source.code(),
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message safe to show to clients; store details never leak
    pub fn public_message(&self) -> &str {
        match self {
            Self::Validation(msg) => msg,
            Self::Store { operation, source } => operation.failure_message(source),
            Self::Internal(_) => "Internal server error",
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
