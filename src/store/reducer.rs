//! Reducer for the post collection.

use crate::mvi::Reducer;

use super::collection::PostCollection;
use super::outcome::PostsOutcome;

/// Applies resolved outcomes to the post collection.
///
/// Pure function; the incoming collection is never mutated.
pub struct PostsReducer;

impl Reducer for PostsReducer {
    type State = PostCollection;
    type Intent = PostsOutcome;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PostsOutcome::PostsLoaded(posts) => PostCollection::from_posts(posts),
            PostsOutcome::PostLoaded(post) => state.with_post(post),
            PostsOutcome::PostDeleted(id) => state.without(&id),
            PostsOutcome::PostCreated => state,
        }
    }
}
