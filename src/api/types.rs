//! Wire types for the posts service.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Post identifier assigned by the service.
///
/// The service may hand out numeric or textual ids; whichever form arrives
/// is kept so the id serializes back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostId {
    Number(u64),
    Text(String),
}

impl PostId {
    /// Parse an id from a route segment. All-digit segments are numeric.
    pub fn parse(segment: &str) -> Self {
        match segment.parse::<u64>() {
            Ok(n) if !segment.starts_with('+') => PostId::Number(n),
            _ => PostId::Text(segment.to_string()),
        }
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostId::Number(n) => write!(f, "{}", n),
            PostId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for PostId {
    fn from(value: u64) -> Self {
        PostId::Number(value)
    }
}

impl From<&str> for PostId {
    fn from(value: &str) -> Self {
        PostId::parse(value)
    }
}

/// A blog post as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub categories: String,
    #[serde(default)]
    pub content: String,
}

/// Request body for creating a post. The service assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub categories: String,
    pub content: String,
}
