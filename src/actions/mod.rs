//! Action layer: tagged requests and the dispatcher that resolves them.

mod action;
mod dispatcher;

pub use action::{ActionCreators, ActionKind, Pending, PostAction};
pub use dispatcher::{Completion, DispatchError, Dispatcher, ErrorReporter, OutcomeSink};
