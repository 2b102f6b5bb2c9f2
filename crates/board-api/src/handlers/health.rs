//! Health check handler

use axum::http::StatusCode;

/// Liveness probe: always 200 with an empty body
///
/// ANY /healthz
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}
