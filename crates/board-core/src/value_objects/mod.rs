//! Value objects - immutable types that represent domain concepts

mod comment_id;

pub use comment_id::CommentId;
