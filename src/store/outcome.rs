//! Resolved request outcomes consumed by the post reducer.

use crate::api::{Post, PostId};
use crate::mvi::Intent;

/// Outcome of a resolved post action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostsOutcome {
    /// Full list fetched. Replaces the collection.
    PostsLoaded(Vec<Post>),

    /// Single post fetched. Merged into the collection.
    PostLoaded(Post),

    /// Post created on the service. The new post is not merged; the list
    /// has to be fetched again to see it.
    PostCreated,

    /// Post deleted. Removes the id from the collection.
    PostDeleted(PostId),
}

impl Intent for PostsOutcome {}
