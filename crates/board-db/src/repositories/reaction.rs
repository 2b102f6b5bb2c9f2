//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use board_core::entities::Reaction;
use board_core::traits::{ReactionRepository, RepoResult};
use board_core::value_objects::CommentId;

use crate::models::ReactionCountModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self, comment_ids), fields(count = comment_ids.len()))]
    async fn find_by_comments(&self, comment_ids: &[CommentId]) -> RepoResult<Vec<Reaction>> {
        if comment_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<String> = comment_ids.iter().map(|id| id.as_str().to_owned()).collect();

        let results = sqlx::query_as::<_, ReactionCountModel>(
            r#"
            SELECT comment_id::TEXT AS comment_id, emoji, count::BIGINT AS count
            FROM reactions
            WHERE comment_id = ANY($1::BIGINT[])
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Reaction::from).collect())
    }

    #[instrument(skip(self))]
    async fn increment(&self, comment_id: &CommentId, emoji: &str) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO reactions (comment_id, emoji, count)
            VALUES ($1::BIGINT, $2, 1)
            ON CONFLICT (comment_id, emoji) DO UPDATE
            SET count = reactions.count + 1
            "#,
        )
        .bind(comment_id.as_str())
        .bind(emoji)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
