use core::convert::Infallible;

use crate::coords::Vec2;
use crate::draw::DrawTarget;
use crate::paint::Color;

use super::{DrawCmd, FillCmd};

/// Graphics state covered by `save` / `restore`.
#[derive(Debug, Copy, Clone, PartialEq)]
struct GraphicsState {
    source: Color,
    radius: i32,
    spread: i32,
}

impl Default for GraphicsState {
    fn default() -> Self {
        // Opaque black, like a fresh cairo context.
        Self { source: Color::opaque_black(), radius: 0, spread: 0 }
    }
}

/// Recording draw target.
///
/// Every call is appended to a command stream that renderers (or tests)
/// replay afterwards. Content is text; fills record the current point,
/// source color and shadow extent at the time of the call.
///
/// ```
/// use umbra_style::draw::DrawTarget;
/// use umbra_style::scene::DrawList;
///
/// let mut list = DrawList::new();
/// list.move_to(umbra_style::coords::Vec2::new(4.0, 8.0));
/// list.fill_content("Aa").unwrap();
/// assert_eq!(list.fills().count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct DrawList {
    cmds: Vec<DrawCmd>,
    state: GraphicsState,
    /// Stack of states pushed by `save`.
    saved: Vec<GraphicsState>,
    /// Path state; not part of `GraphicsState`.
    current_point: Option<Vec2>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded commands and all state. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.cmds.clear();
        self.saved.clear();
        self.state = GraphicsState::default();
        self.current_point = None;
    }

    /// Returns commands in recording order.
    #[inline]
    pub fn commands(&self) -> &[DrawCmd] {
        &self.cmds
    }

    /// Iterates fills in recording (paint) order.
    pub fn fills(&self) -> impl Iterator<Item = &FillCmd> {
        self.cmds.iter().filter_map(|cmd| match cmd {
            DrawCmd::Fill(fill) => Some(fill),
            _ => None,
        })
    }

    /// Number of `save` calls not yet matched by `restore`.
    #[inline]
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Current source color.
    #[inline]
    pub fn source_color(&self) -> Color {
        self.state.source
    }
}

impl DrawTarget for DrawList {
    type Content = str;
    type Error = Infallible;

    fn save(&mut self) {
        self.saved.push(self.state);
        self.cmds.push(DrawCmd::Save);
    }

    /// # Panics
    /// Panics (debug only) if called without a matching `save`.
    fn restore(&mut self) {
        debug_assert!(!self.saved.is_empty(), "restore called without matching save");
        if let Some(state) = self.saved.pop() {
            self.state = state;
        }
        self.cmds.push(DrawCmd::Restore);
    }

    fn current_point(&self) -> Option<Vec2> {
        self.current_point
    }

    fn move_to(&mut self, point: Vec2) {
        self.current_point = Some(point);
    }

    fn rel_move_to(&mut self, delta: Vec2) {
        debug_assert!(self.current_point.is_some(), "rel_move_to without a current point");
        self.current_point = Some(self.current_point.unwrap_or_default() + delta);
    }

    fn set_source_color(&mut self, color: Color) {
        self.state.source = color;
    }

    fn set_shadow_extent(&mut self, radius: i32, spread: i32) {
        self.state.radius = radius;
        self.state.spread = spread;
    }

    fn fill_content(&mut self, content: &str) -> Result<(), Infallible> {
        self.cmds.push(DrawCmd::Fill(FillCmd {
            origin: self.current_point.unwrap_or_default(),
            color: self.state.source,
            radius: self.state.radius,
            spread: self.state.spread,
            content: content.to_string(),
        }));
        Ok(())
    }
}
