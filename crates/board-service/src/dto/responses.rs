//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Identifiers are
//! strings and timestamps are milliseconds since the Unix epoch.

use board_core::entities::ReactionCounts;
use serde::{Deserialize, Serialize};

// ============================================================================
// Comment Responses
// ============================================================================

/// A single stored comment, as returned after creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: String,
    pub name: String,
    pub message: String,
    pub timestamp: i64,
    #[serde(
        rename = "parentCommentId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_comment_id: Option<String>,
}

/// A comment in the thread tree with its replies and reaction counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentNodeResponse {
    pub id: String,
    pub name: String,
    pub message: String,
    pub timestamp: i64,
    pub replies: Vec<CommentNodeResponse>,
    pub reactions: ReactionCounts,
}

// ============================================================================
// Status Responses
// ============================================================================

/// Acknowledgement body for writes that return no resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn reaction_recorded() -> Self {
        Self {
            status: "reaction recorded".to_string(),
        }
    }
}
