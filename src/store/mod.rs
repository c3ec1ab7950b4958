//! Client-side cache of posts keyed by id.

mod collection;
mod outcome;
mod reducer;

pub use collection::PostCollection;
pub use outcome::PostsOutcome;
pub use reducer::PostsReducer;

use crate::api::{Post, PostId};
use crate::mvi::Reducer;
use tokio::sync::watch;

/// Explicitly constructed post store.
///
/// Owns the current collection and runs the reducer. Callers must apply
/// outcomes from a single place (the UI loop) so applications stay serialized.
pub struct PostStore {
    posts: PostCollection,
    notifier: watch::Sender<PostCollection>,
}

impl PostStore {
    /// Create an empty store.
    pub fn init() -> Self {
        let posts = PostCollection::default();
        let (notifier, _) = watch::channel(posts.clone());
        Self { posts, notifier }
    }

    /// Run the reducer once.
    ///
    /// Returns true when the collection changed. Subscribers are notified
    /// only on change.
    pub fn apply(&mut self, outcome: PostsOutcome) -> bool {
        let kind = outcome_name(&outcome);
        let next = PostsReducer::reduce(self.posts.clone(), outcome);
        if next.same_as(&self.posts) {
            tracing::trace!(outcome = kind, "Store unchanged");
            return false;
        }

        self.posts = next;
        tracing::debug!(outcome = kind, posts = self.posts.len(), "Store updated");
        self.notifier.send_replace(self.posts.clone());
        true
    }

    /// Current collection.
    pub fn posts(&self) -> &PostCollection {
        &self.posts
    }

    /// Slice for a single post.
    pub fn post(&self, id: &PostId) -> Option<&Post> {
        self.posts.get(id)
    }

    /// Receive every new collection the store settles on.
    pub fn subscribe(&self) -> watch::Receiver<PostCollection> {
        self.notifier.subscribe()
    }
}

impl Default for PostStore {
    fn default() -> Self {
        Self::init()
    }
}

fn outcome_name(outcome: &PostsOutcome) -> &'static str {
    match outcome {
        PostsOutcome::PostsLoaded(_) => "posts_loaded",
        PostsOutcome::PostLoaded(_) => "post_loaded",
        PostsOutcome::PostCreated => "post_created",
        PostsOutcome::PostDeleted(_) => "post_deleted",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u64) -> Post {
        Post {
            id: PostId::Number(id),
            title: format!("Post {}", id),
            categories: "misc".to_string(),
            content: "body".to_string(),
        }
    }

    #[test]
    fn init_starts_empty() {
        let store = PostStore::init();
        assert!(store.posts().is_empty());
    }

    #[test]
    fn apply_reports_change() {
        let mut store = PostStore::init();
        assert!(store.apply(PostsOutcome::PostLoaded(post(1))));
        assert!(!store.apply(PostsOutcome::PostCreated));
        assert!(!store.apply(PostsOutcome::PostDeleted(PostId::Number(5))));
        assert!(store.apply(PostsOutcome::PostDeleted(PostId::Number(1))));
    }

    #[test]
    fn subscribers_see_changes_only() {
        let mut store = PostStore::init();
        let mut rx = store.subscribe();

        store.apply(PostsOutcome::PostCreated);
        assert!(!rx.has_changed().unwrap());

        store.apply(PostsOutcome::PostsLoaded(vec![post(1), post(2)]));
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().len(), 2);
    }

    #[test]
    fn post_slice_reads_current_collection() {
        let mut store = PostStore::init();
        store.apply(PostsOutcome::PostLoaded(post(3)));
        assert_eq!(store.post(&PostId::Number(3)).unwrap().title, "Post 3");
        assert!(store.post(&PostId::Number(4)).is_none());
    }
}
