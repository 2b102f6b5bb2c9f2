//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod comments;
pub mod health;
pub mod reactions;

use axum::http::StatusCode;

/// Fallback for known paths hit with an unsupported method
pub async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}
