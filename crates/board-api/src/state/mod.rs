//! Shared handler state

use std::sync::Arc;

use board_service::{CommentService, ReactionService, ServiceContext};

/// Cloned into every handler; all clones share one service context
#[derive(Clone, Debug)]
pub struct AppState {
    services: Arc<ServiceContext>,
}

impl AppState {
    pub fn new(services: ServiceContext) -> Self {
        Self {
            services: Arc::new(services),
        }
    }

    /// Comment use cases bound to the shared repositories
    pub fn comments(&self) -> CommentService<'_> {
        CommentService::new(&self.services)
    }

    /// Reaction use cases bound to the shared repositories
    pub fn reactions(&self) -> ReactionService<'_> {
        ReactionService::new(&self.services)
    }
}
