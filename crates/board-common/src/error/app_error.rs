//! Application error types
//!
//! Startup and serving failures for the binaries, plus the JSON error body
//! every failed request returns.

use serde::{Deserialize, Serialize};

/// Failure while bringing the server up or keeping it running
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    // Bind and serve failures
    #[error("Server error: {0}")]
    Server(String),
}

/// Error body returned to clients: `{"error": "<message>"}`
///
/// The message is always a fixed, client-safe string; details stay in the logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
