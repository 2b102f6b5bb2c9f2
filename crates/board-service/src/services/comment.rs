//! Comment service
//!
//! Fetches the threaded comment tree and creates comments.

use board_core::build_thread;
use board_core::entities::NewComment;
use board_core::value_objects::CommentId;
use tracing::{info, instrument};

use crate::dto::{CommentNodeResponse, CommentResponse, CreateCommentRequest, COMMENT_FIELDS_REQUIRED};

use super::context::ServiceContext;
use super::error::{Operation, ServiceError, ServiceResult};
use super::reaction::ReactionService;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Most recent comments as a reply tree with reaction counts.
    ///
    /// Roots come newest first; replies oldest first. Either the whole tree
    /// is returned or an error, never a partial result.
    #[instrument(skip(self))]
    pub async fn list_thread(&self) -> ServiceResult<Vec<CommentNodeResponse>> {
        self.ctx
            .with_deadline(Operation::FetchComments, self.load_thread())
            .await
    }

    async fn load_thread(&self) -> ServiceResult<Vec<CommentNodeResponse>> {
        let comments = self
            .ctx
            .comment_repo()
            .find_recent(self.ctx.fetch_limit())
            .await
            .map_err(|e| ServiceError::store(Operation::FetchComments, e))?;

        let ids: Vec<CommentId> = comments.iter().map(|c| c.id.clone()).collect();
        let reactions = ReactionService::new(self.ctx).load_reactions(&ids).await?;

        let forest = build_thread(comments, &reactions);
        Ok(forest.into_iter().map(CommentNodeResponse::from).collect())
    }

    /// Store a new comment, root or reply
    #[instrument(skip(self, request), fields(is_reply = request.parent_id.is_some()))]
    pub async fn create_comment(&self, request: CreateCommentRequest) -> ServiceResult<CommentResponse> {
        let new_comment = NewComment::new(
            &request.name,
            &request.message,
            request.parent_id.as_ref().map(CommentId::as_str),
        );
        if !new_comment.is_complete() {
            return Err(ServiceError::validation(COMMENT_FIELDS_REQUIRED));
        }

        let comment = self
            .ctx
            .with_deadline(Operation::CreateComment, async {
                self.ctx
                    .comment_repo()
                    .create(&new_comment)
                    .await
                    .map_err(|e| ServiceError::store(Operation::CreateComment, e))
            })
            .await?;

        info!(
            comment_id = %comment.id,
            parent_id = ?comment.parent_id.as_ref().map(CommentId::as_str),
            "Comment created"
        );

        Ok(CommentResponse::from(comment))
    }
}
