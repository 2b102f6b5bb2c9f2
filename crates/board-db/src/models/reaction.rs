//! Reaction database model

use sqlx::FromRow;

/// One `(comment, emoji)` counter row
#[derive(Debug, Clone, FromRow)]
pub struct ReactionCountModel {
    pub comment_id: String,
    pub emoji: String,
    pub count: i64,
}
