//! Create-post form: state, reducer and validation.

mod intent;
mod reducer;
mod state;
mod validate;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{FormField, FormState, PostForm};
pub use validate::validate;
