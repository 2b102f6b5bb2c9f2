//! Test fixtures and data generators
//!
//! Provides reusable request bodies for integration tests. Response bodies
//! are parsed into the service DTOs re-exported here.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

pub use board_service::dto::{CommentNodeResponse, CommentResponse, StatusResponse};
pub use board_common::ErrorResponse;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Body for `POST /comments`
#[derive(Debug, Clone, Serialize)]
pub struct NewCommentBody {
    pub name: String,
    pub message: String,
    #[serde(rename = "parentId", skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl NewCommentBody {
    pub fn root(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
            parent_id: None,
        }
    }

    pub fn reply(name: &str, message: &str, parent_id: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
            parent_id: Some(parent_id.to_string()),
        }
    }

    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self::root(&format!("tester{suffix}"), &format!("message {suffix}"))
    }
}

/// Body for `POST /reactions`
#[derive(Debug, Clone, Serialize)]
pub struct NewReactionBody {
    #[serde(rename = "commentId")]
    pub comment_id: String,
    pub emoji: String,
}

impl NewReactionBody {
    pub fn new(comment_id: &str, emoji: &str) -> Self {
        Self {
            comment_id: comment_id.to_string(),
            emoji: emoji.to_string(),
        }
    }
}

/// Find a node anywhere in a thread by id
pub fn find_node<'a>(nodes: &'a [CommentNodeResponse], id: &str) -> Option<&'a CommentNodeResponse> {
    nodes.iter().find_map(|node| {
        if node.id == id {
            Some(node)
        } else {
            find_node(&node.replies, id)
        }
    })
}
