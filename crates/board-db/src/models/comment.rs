//! Comment database model

use sqlx::FromRow;

/// Row shape of a `comments` query
///
/// Identifiers are selected as text and the creation time as epoch
/// milliseconds, so the model does not depend on the exact column types.
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: String,
    pub name: String,
    pub message: String,
    pub created_at_ms: i64,
    pub parent_id: Option<String>,
}
