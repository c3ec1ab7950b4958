//! Model-View-Intent primitives shared by the post store and the create form.
//!
//! ```text
//! outcome / key press ──→ Reducer ──→ State ──→ render
//! ```
//!
//! Reducers are plain functions of `(State, Intent)`; all I/O happens before an
//! intent is built (request resolution, terminal input).

/// Something a reducer consumes: a resolved request or a user edit.
pub trait Intent: Send + 'static {}

/// A value the views render from. Replaced wholesale on every transition.
pub trait State: Clone + PartialEq + Default + Send + 'static {}

/// The only place state transitions happen.
pub trait Reducer {
    type State: State;
    type Intent: Intent;

    /// Next state for `intent`. Must not perform side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Apply `intents` in order.
    fn reduce_all(
        state: Self::State,
        intents: impl IntoIterator<Item = Self::Intent>,
    ) -> Self::State {
        intents.into_iter().fold(state, Self::reduce)
    }
}
