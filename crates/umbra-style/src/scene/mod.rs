//! Recorded draw streams.
//!
//! [`DrawList`] is the reference [`DrawTarget`](crate::draw::DrawTarget):
//! it records calls instead of rasterizing them.

mod cmd;
mod list;

pub use cmd::{DrawCmd, FillCmd};
pub use list::DrawList;
