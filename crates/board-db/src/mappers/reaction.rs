//! Reaction model -> entity mapper

use board_core::entities::Reaction;
use board_core::value_objects::CommentId;

use crate::models::ReactionCountModel;

/// Convert ReactionCountModel to Reaction entity
impl From<ReactionCountModel> for Reaction {
    fn from(model: ReactionCountModel) -> Self {
        Reaction::new(CommentId::new(model.comment_id), model.emoji, model.count)
    }
}
