//! Paint model shared between shadows and draw targets.
//!
//! Scope:
//! - color representation (straight alpha, premultiplied on demand)
//! - canonical CSS color strings

pub mod color;

pub use color::Color;
