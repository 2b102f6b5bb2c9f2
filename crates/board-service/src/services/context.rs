//! Service context - dependency container for services
//!
//! Holds the repositories and request limits needed by services.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use board_common::BoardConfig;
use board_core::traits::{CommentRepository, ReactionRepository};
use board_core::DomainError;

use super::error::{Operation, ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the dependency container that gets passed to all services.
/// It provides access to:
/// - Comment and reaction repositories
/// - The per-request store deadline
/// - The thread fetch limit
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    comment_repo: Arc<dyn CommentRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,

    // Limits
    request_timeout: Duration,
    fetch_limit: i64,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        reaction_repo: Arc<dyn ReactionRepository>,
        board: &BoardConfig,
    ) -> Self {
        Self {
            comment_repo,
            reaction_repo,
            request_timeout: board.request_timeout(),
            fetch_limit: board.fetch_limit(),
        }
    }

    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Repositories ===

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    // === Limits ===

    /// Maximum number of comments a thread fetch returns
    pub fn fetch_limit(&self) -> i64 {
        self.fetch_limit
    }

    /// Run `work` under the request deadline.
    ///
    /// On expiry the future is dropped, which cancels any in-flight query.
    pub async fn with_deadline<T, F>(&self, operation: Operation, work: F) -> ServiceResult<T>
    where
        F: Future<Output = ServiceResult<T>>,
    {
        match tokio::time::timeout(self.request_timeout, work).await {
            Ok(result) => result,
            Err(_) => Err(ServiceError::store(
                operation,
                DomainError::Timeout(self.request_timeout),
            )),
        }
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("request_timeout", &self.request_timeout)
            .field("fetch_limit", &self.fetch_limit)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    comment_repo: Option<Arc<dyn CommentRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    request_timeout: Duration,
    fetch_limit: i64,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        let board = BoardConfig::default();
        Self {
            comment_repo: None,
            reaction_repo: None,
            request_timeout: board.request_timeout(),
            fetch_limit: board.fetch_limit(),
        }
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn board_config(mut self, board: &BoardConfig) -> Self {
        self.request_timeout = board.request_timeout();
        self.fetch_limit = board.fetch_limit();
        self
    }

    #[cfg(test)]
    pub(crate) fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            comment_repo: self
                .comment_repo
                .ok_or_else(|| ServiceError::internal("comment_repo is required"))?,
            reaction_repo: self
                .reaction_repo
                .ok_or_else(|| ServiceError::internal("reaction_repo is required"))?,
            request_timeout: self.request_timeout,
            fetch_limit: self.fetch_limit,
        })
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
