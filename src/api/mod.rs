//! Client for the remote posts service.
//!
//! Four operations against `{base_url}/posts`, each authorized by the shared
//! `key` query parameter. Failures are returned to the caller unchanged; there
//! is no retry.

mod client;
mod error;
mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::{NewPost, Post, PostId};
