//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Comment, NewComment, Reaction};
use crate::error::DomainError;
use crate::value_objects::CommentId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// List the most recent comments, newest (highest id) first
    async fn find_recent(&self, limit: i64) -> RepoResult<Vec<Comment>>;

    /// Insert a comment and return it with its assigned id and timestamp
    async fn create(&self, comment: &NewComment) -> RepoResult<Comment>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Fetch every reaction counter for the given comments in one round trip
    async fn find_by_comments(&self, comment_ids: &[CommentId]) -> RepoResult<Vec<Reaction>>;

    /// Increment the (comment, emoji) counter, creating it at 1 when absent.
    ///
    /// Must be a single atomic statement.
    async fn increment(&self, comment_id: &CommentId, emoji: &str) -> RepoResult<()>;
}
