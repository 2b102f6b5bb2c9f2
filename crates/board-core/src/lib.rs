//! # board-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! reply-tree builder.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod thread;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    group_reactions, Comment, NewComment, Reaction, ReactionCounts, ReactionMap,
};
pub use error::DomainError;
pub use thread::{build_thread, CommentNode};
pub use traits::{CommentRepository, ReactionRepository, RepoResult};
pub use value_objects::CommentId;
