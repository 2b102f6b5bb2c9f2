//! Reaction service
//!
//! Loads reaction counts for a set of comments and records new reactions.

use board_core::entities::{group_reactions, ReactionMap};
use board_core::value_objects::CommentId;
use tracing::{debug, info, instrument};

use crate::dto::{AddReactionRequest, REACTION_FIELDS_REQUIRED};

use super::context::ServiceContext;
use super::error::{Operation, ServiceError, ServiceResult};

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Reaction counts keyed by comment id.
    ///
    /// An empty id set short-circuits without touching the store. Comments
    /// with no reactions have no entry in the returned map.
    #[instrument(skip(self, comment_ids), fields(count = comment_ids.len()))]
    pub async fn load_reactions(&self, comment_ids: &[CommentId]) -> ServiceResult<ReactionMap> {
        if comment_ids.is_empty() {
            debug!("No comments, skipping reaction lookup");
            return Ok(ReactionMap::new());
        }

        let reactions = self
            .ctx
            .reaction_repo()
            .find_by_comments(comment_ids)
            .await
            .map_err(|e| ServiceError::store(Operation::FetchReactions, e))?;

        Ok(group_reactions(reactions))
    }

    /// Add one to the (comment, emoji) counter
    #[instrument(skip(self, request))]
    pub async fn record_reaction(&self, request: AddReactionRequest) -> ServiceResult<()> {
        let comment_id = request.comment_id.trim();
        let emoji = request.emoji.trim();
        if comment_id.is_empty() || emoji.is_empty() {
            return Err(ServiceError::validation(REACTION_FIELDS_REQUIRED));
        }

        let comment_id = CommentId::new(comment_id);
        self.ctx
            .with_deadline(Operation::RecordReaction, async {
                self.ctx
                    .reaction_repo()
                    .increment(&comment_id, emoji)
                    .await
                    .map_err(|e| ServiceError::store(Operation::RecordReaction, e))
            })
            .await?;

        info!(comment_id = %comment_id, emoji = %emoji, "Reaction recorded");

        Ok(())
    }
}
