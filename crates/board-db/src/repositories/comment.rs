//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use board_core::entities::{Comment, NewComment};
use board_core::traits::{CommentRepository, RepoResult};

use crate::models::CommentModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_recent(&self, limit: i64) -> RepoResult<Vec<Comment>> {
        let limit = limit.clamp(1, 100);

        let results = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT id::TEXT AS id,
                   name,
                   message,
                   (EXTRACT(EPOCH FROM created_at) * 1000)::BIGINT AS created_at_ms,
                   parent_id::TEXT AS parent_id
            FROM comments
            ORDER BY id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Comment::try_from).collect()
    }

    #[instrument(skip(self, comment), fields(is_reply = comment.parent_id.is_some()))]
    async fn create(&self, comment: &NewComment) -> RepoResult<Comment> {
        let result = sqlx::query_as::<_, CommentModel>(
            r#"
            INSERT INTO comments (name, message, parent_id)
            VALUES ($1, $2, $3::BIGINT)
            RETURNING id::TEXT AS id,
                      name,
                      message,
                      (EXTRACT(EPOCH FROM created_at) * 1000)::BIGINT AS created_at_ms,
                      parent_id::TEXT AS parent_id
            "#,
        )
        .bind(&comment.name)
        .bind(&comment.message)
        .bind(comment.parent_id.as_ref().map(|id| id.as_str()))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Comment::try_from(result)
    }
}
