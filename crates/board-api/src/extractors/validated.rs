//! Validated JSON extractor
//!
//! Extracts and validates JSON request bodies using the validator crate.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::Validate;

use crate::response::ApiError;

/// Validated JSON extractor
///
/// Reads the raw body and parses it as JSON regardless of `Content-Type`,
/// then validates it with the `validator` crate. Unreadable or malformed
/// bodies become [`ApiError::InvalidJson`].
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|e| {
            debug!(error = %e, "Failed to read request body");
            ApiError::InvalidJson
        })?;

        let value: T = serde_json::from_slice(&body).map_err(|e| {
            debug!(error = %e, "Rejected request body");
            ApiError::InvalidJson
        })?;

        // Validate
        value.validate()?;

        Ok(ValidatedJson(value))
    }
}
