//! Error handling utilities for repositories

use board_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
///
/// Row shape problems become `DecodeError`; everything else (connection,
/// pool, query and constraint failures) is `StoreUnavailable`.
pub fn map_db_error(e: SqlxError) -> DomainError {
    match e {
        SqlxError::ColumnDecode { .. }
        | SqlxError::Decode(_)
        | SqlxError::ColumnNotFound(_)
        | SqlxError::ColumnIndexOutOfBounds { .. }
        | SqlxError::TypeNotFound { .. } => DomainError::DecodeError(e.to_string()),
        _ => DomainError::StoreUnavailable(e.to_string()),
    }
}
