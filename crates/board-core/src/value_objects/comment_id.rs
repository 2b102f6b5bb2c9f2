//! Comment identifier - opaque, ordering-comparable string ID
//!
//! The store assigns increasing integers, but the API treats identifiers as
//! opaque strings. Ordering is numeric when both sides are integers, so
//! `"9" < "10"`; any other pair falls back to lexical order.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// Identifier of a comment as seen by clients
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommentId(String);

impl CommentId {
    /// Create a new CommentId from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Numeric value, if the identifier is a plain integer
    #[inline]
    pub fn as_number(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl Ord for CommentId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.as_number(), other.as_number()) {
            // Lexical tie-break keeps "007" and "7" distinct, matching Eq
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for CommentId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CommentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for CommentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<i64> for CommentId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<CommentId> for String {
    fn from(id: CommentId) -> Self {
        id.0
    }
}

impl Serialize for CommentId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

// Deserialize from string or number
impl<'de> Deserialize<'de> for CommentId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct CommentIdVisitor;

        impl Visitor<'_> for CommentIdVisitor {
            type Value = CommentId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer comment ID")
            }

            fn visit_i64<E>(self, value: i64) -> Result<CommentId, E>
            where
                E: de::Error,
            {
                Ok(CommentId::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<CommentId, E>
            where
                E: de::Error,
            {
                Ok(CommentId(value.to_string()))
            }

            fn visit_str<E>(self, value: &str) -> Result<CommentId, E>
            where
                E: de::Error,
            {
                Ok(CommentId::from(value))
            }

            fn visit_string<E>(self, value: String) -> Result<CommentId, E>
            where
                E: de::Error,
            {
                Ok(CommentId(value))
            }
        }

        deserializer.deserialize_any(CommentIdVisitor)
    }
}
