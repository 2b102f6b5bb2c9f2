//! Comment threads - assembling flat comment rows into reply trees
//!
//! The store hands back comments newest-first, each optionally pointing at a
//! parent. [`build_thread`] nests every comment under its parent, keeps
//! siblings in ascending id order, and attaches per-comment reaction counts.
//!
//! Placement rules:
//! - a comment without a parent, or whose parent is not in the batch, is a root
//! - roots keep the order they arrived in (newest first)
//! - replies are sorted ascending by id (oldest first)
//! - a comment stuck on a parent cycle is promoted to a root, so no input row
//!   is ever dropped

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::entities::{Comment, ReactionCounts, ReactionMap};
use crate::value_objects::CommentId;

/// A comment with its nested replies and reaction counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentNode {
    pub id: CommentId,
    pub name: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub replies: Vec<CommentNode>,
    pub reactions: ReactionCounts,
}

impl CommentNode {
    fn shell(comment: Comment, reactions: ReactionCounts) -> Self {
        Self {
            id: comment.id,
            name: comment.name,
            message: comment.message,
            created_at: comment.created_at,
            replies: Vec::new(),
            reactions,
        }
    }

    /// Creation time in milliseconds since the Unix epoch
    #[inline]
    pub fn timestamp_millis(&self) -> i64 {
        self.created_at.timestamp_millis()
    }
}

/// Build the reply forest for a newest-first batch of comments.
///
/// `reactions` is keyed by comment id; comments without an entry get an
/// empty reaction map.
pub fn build_thread(comments: Vec<Comment>, reactions: &ReactionMap) -> Vec<CommentNode> {
    let index: HashMap<&CommentId, usize> = comments
        .iter()
        .enumerate()
        .map(|(idx, comment)| (&comment.id, idx))
        .collect();

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); comments.len()];
    let mut roots = Vec::new();

    for (idx, comment) in comments.iter().enumerate() {
        match comment.parent_id.as_ref().and_then(|parent| index.get(parent)) {
            Some(&parent) if parent != idx => children[parent].push(idx),
            _ => roots.push(idx),
        }
    }

    // One sort per parent leaves the same order as re-sorting on every insert
    for siblings in &mut children {
        siblings.sort_by(|&a, &b| comments[a].id.cmp(&comments[b].id));
    }

    let mut slots: Vec<Option<Comment>> = comments.into_iter().map(Some).collect();
    let mut forest = Vec::with_capacity(roots.len());

    for root in roots {
        if let Some(node) = assemble(root, &mut slots, &children, reactions) {
            forest.push(node);
        }
    }

    // Anything still unplaced sits on a parent cycle with no path to a root
    let stranded: Vec<usize> = (0..slots.len()).filter(|&idx| slots[idx].is_some()).collect();
    for idx in stranded {
        if let Some(node) = assemble(idx, &mut slots, &children, reactions) {
            forest.push(node);
        }
    }

    forest
}

fn assemble(
    idx: usize,
    slots: &mut [Option<Comment>],
    children: &[Vec<usize>],
    reactions: &ReactionMap,
) -> Option<CommentNode> {
    let comment = slots[idx].take()?;
    let counts = reactions.get(&comment.id).cloned().unwrap_or_default();

    let mut node = CommentNode::shell(comment, counts);
    node.replies = children[idx]
        .iter()
        .filter_map(|&child| assemble(child, slots, children, reactions))
        .collect();

    Some(node)
}
