//! Reaction entity - a per-comment emoji counter

use std::collections::{BTreeMap, HashMap};

use crate::value_objects::CommentId;

/// Emoji label -> count for a single comment.
///
/// Ordered so that serialized output is stable between requests.
pub type ReactionCounts = BTreeMap<String, i64>;

/// Comment identifier -> emoji counts. Comments without reactions are absent.
pub type ReactionMap = HashMap<CommentId, ReactionCounts>;

/// Reaction counter row; (comment_id, emoji) is unique
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub comment_id: CommentId,
    pub emoji: String,
    pub count: i64,
}

impl Reaction {
    /// Create a new Reaction counter
    pub fn new(comment_id: CommentId, emoji: String, count: i64) -> Self {
        Self {
            comment_id,
            emoji,
            count,
        }
    }

    /// Check if reaction uses a specific emoji
    #[inline]
    pub fn is_emoji(&self, emoji: &str) -> bool {
        self.emoji == emoji
    }
}

/// Fold reaction rows into a per-comment lookup
pub fn group_reactions(reactions: impl IntoIterator<Item = Reaction>) -> ReactionMap {
    let mut map = ReactionMap::new();
    for reaction in reactions {
        map.entry(reaction.comment_id)
            .or_default()
            .insert(reaction.emoji, reaction.count);
    }
    map
}
