use crate::coords::Vec2;
use crate::paint::Color;

/// Content fill payload.
#[derive(Debug, Clone, PartialEq)]
pub struct FillCmd {
    /// Current point at fill time, in logical pixels.
    pub origin: Vec2,
    pub color: Color,
    /// Blur radius in effect for this fill.
    pub radius: i32,
    /// Spread in effect for this fill.
    pub spread: i32,
    pub content: String,
}

/// Renderer-agnostic command stream recorded by [`DrawList`](super::DrawList).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Save,
    Restore,
    Fill(FillCmd),
}
