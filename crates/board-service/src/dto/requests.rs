//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Missing and `null` fields deserialize to empty strings so that they fail
//! validation with the field's message instead of being a JSON error.

use board_core::value_objects::CommentId;
use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationError};

pub const COMMENT_FIELDS_REQUIRED: &str = "Name and message are required";
pub const REACTION_FIELDS_REQUIRED: &str = "Comment ID and emoji are required";

// ============================================================================
// Comment Requests
// ============================================================================

/// Create comment request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank", message = "Name and message are required"))]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank", message = "Name and message are required"))]
    pub message: String,

    /// Comment being replied to; absent, `null` or blank means a root comment
    #[serde(default, rename = "parentId")]
    pub parent_id: Option<CommentId>,
}

// ============================================================================
// Reaction Requests
// ============================================================================

/// Add reaction request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AddReactionRequest {
    #[serde(default, rename = "commentId", deserialize_with = "id_as_string")]
    #[validate(custom(function = "not_blank", message = "Comment ID and emoji are required"))]
    pub comment_id: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank", message = "Comment ID and emoji are required"))]
    pub emoji: String,
}

// ============================================================================
// Field helpers
// ============================================================================

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept `"42"`, `42` or `null`
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<CommentId>::deserialize(deserializer)?
        .map(CommentId::into_inner)
        .unwrap_or_default())
}
