//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in board-core.
//! Each repository handles database operations for a specific domain entity.

mod comment;
mod error;
mod reaction;

pub use comment::PgCommentRepository;
pub use error::map_db_error;
pub use reaction::PgReactionRepository;
