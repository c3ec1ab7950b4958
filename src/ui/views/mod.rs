//! Screen bodies, one per route.

mod index;
mod new_post;
mod show;

pub use index::render_index;
pub use new_post::render_new_post;
pub use show::{render_delete_confirm, render_show};
