//! Comment model -> entity mapper

use board_core::entities::Comment;
use board_core::error::DomainError;
use board_core::value_objects::CommentId;
use chrono::DateTime;

use crate::models::CommentModel;

/// Convert CommentModel to Comment entity
impl TryFrom<CommentModel> for Comment {
    type Error = DomainError;

    fn try_from(model: CommentModel) -> Result<Self, Self::Error> {
        let created_at = DateTime::from_timestamp_millis(model.created_at_ms).ok_or_else(|| {
            DomainError::DecodeError(format!(
                "comment {} has out of range timestamp {}",
                model.id, model.created_at_ms
            ))
        })?;

        Ok(Comment {
            id: CommentId::new(model.id),
            name: model.name,
            message: model.message,
            created_at,
            parent_id: model.parent_id.map(CommentId::new),
        })
    }
}
