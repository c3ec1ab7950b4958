use std::fmt;
use std::future::Future;
use std::pin::Pin;

use crate::api::{ApiClient, ApiError, NewPost, Post, PostId};

/// In-flight request carried by an action. Consumed once by the dispatcher.
pub type Pending<T> = Pin<Box<dyn Future<Output = Result<T, ApiError>> + Send + 'static>>;

/// Tag of a [`PostAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    ListPosts,
    GetPost,
    CreatePost,
    DeletePost,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::ListPosts => "list_posts",
            ActionKind::GetPost => "get_post",
            ActionKind::CreatePost => "create_post",
            ActionKind::DeletePost => "delete_post",
        }
    }
}

/// A tagged request against the posts service.
///
/// Fetches and creates carry the pending request as their payload. A delete
/// carries the id itself: it is known at dispatch time and is all the store
/// needs, so the request rides alongside.
pub enum PostAction {
    ListPosts(Pending<Vec<Post>>),
    GetPost(Pending<Post>),
    CreatePost(Pending<()>),
    DeletePost { id: PostId, request: Pending<()> },
}

impl PostAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            PostAction::ListPosts(_) => ActionKind::ListPosts,
            PostAction::GetPost(_) => ActionKind::GetPost,
            PostAction::CreatePost(_) => ActionKind::CreatePost,
            PostAction::DeletePost { .. } => ActionKind::DeletePost,
        }
    }
}

impl fmt::Debug for PostAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostAction::DeletePost { id, .. } => f
                .debug_struct("DeletePost")
                .field("id", id)
                .finish_non_exhaustive(),
            other => f.write_str(other.kind().as_str()),
        }
    }
}

/// Builds actions over an [`ApiClient`].
#[derive(Clone)]
pub struct ActionCreators {
    api: ApiClient,
}

impl ActionCreators {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Fetch all posts.
    pub fn fetch_posts(&self) -> PostAction {
        let api = self.api.clone();
        PostAction::ListPosts(Box::pin(async move { api.list_posts().await }))
    }

    /// Fetch a single post.
    pub fn fetch_post(&self, id: PostId) -> PostAction {
        let api = self.api.clone();
        PostAction::GetPost(Box::pin(async move { api.get_post(&id).await }))
    }

    /// Submit a new post. The service's answer is not merged into the store.
    pub fn create_post(&self, post: NewPost) -> PostAction {
        let api = self.api.clone();
        PostAction::CreatePost(Box::pin(async move { api.create_post(&post).await }))
    }

    /// Delete a post by id.
    pub fn delete_post(&self, id: PostId) -> PostAction {
        let api = self.api.clone();
        let target = id.clone();
        PostAction::DeletePost {
            id,
            request: Box::pin(async move { api.delete_post(&target).await }),
        }
    }
}
