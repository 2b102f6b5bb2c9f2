//! Repository traits

mod repositories;

pub use repositories::{CommentRepository, ReactionRepository, RepoResult};
