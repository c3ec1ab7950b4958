//! Normalized id → post mapping.

use crate::api::{Post, PostId};
use crate::mvi::State;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Posts keyed by id.
///
/// The map sits behind an `Arc` and is never mutated in place: every change
/// builds a new map, so `same_as` tells subscribers whether anything moved.
#[derive(Debug, Clone, Default)]
pub struct PostCollection {
    posts: Arc<BTreeMap<PostId, Post>>,
}

impl PostCollection {
    /// Build a collection from posts. A later post replaces an earlier one
    /// with the same id.
    pub fn from_posts(posts: impl IntoIterator<Item = Post>) -> Self {
        let posts = posts
            .into_iter()
            .map(|post| (post.id.clone(), post))
            .collect();
        Self {
            posts: Arc::new(posts),
        }
    }

    /// Copy of this collection with `post` stored under its id.
    pub fn with_post(&self, post: Post) -> Self {
        let mut posts = BTreeMap::clone(&self.posts);
        posts.insert(post.id.clone(), post);
        Self {
            posts: Arc::new(posts),
        }
    }

    /// Copy of this collection without `id`. Returns `self` unchanged
    /// (same allocation) when the id is absent.
    pub fn without(&self, id: &PostId) -> Self {
        if !self.posts.contains_key(id) {
            return self.clone();
        }
        let mut posts = BTreeMap::clone(&self.posts);
        posts.remove(id);
        Self {
            posts: Arc::new(posts),
        }
    }

    /// True when both handles point at the same map.
    pub fn same_as(&self, other: &PostCollection) -> bool {
        Arc::ptr_eq(&self.posts, &other.posts)
    }

    pub fn get(&self, id: &PostId) -> Option<&Post> {
        self.posts.get(id)
    }

    pub fn contains(&self, id: &PostId) -> bool {
        self.posts.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &PostId> {
        self.posts.keys()
    }

    /// Posts in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Post> {
        self.posts.values()
    }
}

impl PartialEq for PostCollection {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other) || self.posts == other.posts
    }
}

impl Eq for PostCollection {}

impl State for PostCollection {}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u64, title: &str) -> Post {
        Post {
            id: PostId::Number(id),
            title: title.to_string(),
            categories: String::new(),
            content: String::new(),
        }
    }

    #[test]
    fn default_is_empty() {
        let posts = PostCollection::default();
        assert!(posts.is_empty());
        assert_eq!(posts.len(), 0);
    }

    #[test]
    fn with_post_leaves_original_untouched() {
        let original = PostCollection::from_posts(vec![post(1, "A")]);
        let updated = original.with_post(post(2, "B"));

        assert_eq!(original.len(), 1);
        assert_eq!(updated.len(), 2);
        assert!(!original.same_as(&updated));
    }

    #[test]
    fn without_absent_id_keeps_allocation() {
        let original = PostCollection::from_posts(vec![post(1, "A")]);
        let same = original.without(&PostId::Number(9));
        assert!(original.same_as(&same));
    }

    #[test]
    fn equality_compares_contents() {
        let a = PostCollection::from_posts(vec![post(1, "A")]);
        let b = PostCollection::from_posts(vec![post(1, "A")]);
        assert!(!a.same_as(&b));
        assert_eq!(a, b);
    }

    #[test]
    fn duplicate_ids_keep_the_last_post() {
        let posts = PostCollection::from_posts(vec![post(1, "old"), post(1, "new")]);
        assert_eq!(posts.len(), 1);
        assert_eq!(posts.get(&PostId::Number(1)).unwrap().title, "new");
    }
}
