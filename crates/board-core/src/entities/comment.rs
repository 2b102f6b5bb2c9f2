//! Comment entity - a flat, storage-shaped board comment

use chrono::{DateTime, Utc};

use crate::value_objects::CommentId;

/// Comment entity as stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub name: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub parent_id: Option<CommentId>,
}

impl Comment {
    /// Creation time in milliseconds since the Unix epoch
    #[inline]
    pub fn timestamp_millis(&self) -> i64 {
        self.created_at.timestamp_millis()
    }
}

/// A comment about to be inserted; the store assigns id and timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub name: String,
    pub message: String,
    pub parent_id: Option<CommentId>,
}

impl NewComment {
    /// Create a new comment payload, trimming surrounding whitespace.
    ///
    /// A blank parent identifier is treated as absent.
    pub fn new(name: &str, message: &str, parent_id: Option<&str>) -> Self {
        Self {
            name: name.trim().to_string(),
            message: message.trim().to_string(),
            parent_id: parent_id
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(CommentId::from),
        }
    }

    /// Check that both name and message carry content
    #[inline]
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.message.is_empty()
    }
}
