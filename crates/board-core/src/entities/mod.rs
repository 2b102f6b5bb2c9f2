//! Domain entities - core business objects

mod comment;
mod reaction;

pub use comment::{Comment, NewComment};
pub use reaction::{group_reactions, Reaction, ReactionCounts, ReactionMap};
