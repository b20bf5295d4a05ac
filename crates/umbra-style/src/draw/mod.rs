//! Drawing-target abstraction used by shadow painting.

mod target;

pub use target::{DrawTarget, SavedState};
