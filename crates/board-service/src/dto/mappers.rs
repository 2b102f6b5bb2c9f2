//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use board_core::entities::Comment;
use board_core::CommentNode;

use super::responses::{CommentNodeResponse, CommentResponse};

// ============================================================================
// Comment Mappers
// ============================================================================

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            name: comment.name.clone(),
            message: comment.message.clone(),
            timestamp: comment.timestamp_millis(),
            parent_comment_id: comment.parent_id.as_ref().map(ToString::to_string),
        }
    }
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self::from(&comment)
    }
}

impl From<CommentNode> for CommentNodeResponse {
    fn from(node: CommentNode) -> Self {
        let timestamp = node.timestamp_millis();
        Self {
            id: node.id.into_inner(),
            name: node.name,
            message: node.message,
            timestamp,
            replies: node.replies.into_iter().map(Self::from).collect(),
            reactions: node.reactions,
        }
    }
}
