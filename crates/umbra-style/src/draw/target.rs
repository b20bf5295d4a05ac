use core::ops::{Deref, DerefMut};

use crate::coords::Vec2;
use crate::paint::Color;

/// A drawing surface shadows can be composited onto.
///
/// The model follows cairo-style immediate APIs:
/// - `save` / `restore` push and pop the graphics state (source color, shadow extent)
/// - the current point is path state and is *not* covered by `save` / `restore`
/// - `fill_content` renders `content` at the current point with the current source
pub trait DrawTarget {
    /// What gets rendered per layer (a text run, a shape, ...).
    type Content: ?Sized;
    /// Failure reported by [`fill_content`](Self::fill_content).
    type Error;

    fn save(&mut self);

    /// Pops the state pushed by the matching [`save`](Self::save).
    fn restore(&mut self);

    fn current_point(&self) -> Option<Vec2>;

    fn move_to(&mut self, point: Vec2);

    /// Moves the current point by `delta`. Requires a current point.
    fn rel_move_to(&mut self, delta: Vec2);

    fn set_source_color(&mut self, color: Color);

    /// Blur radius and spread of the layer about to be filled.
    ///
    /// Backends that rasterize blurred shadows hook in here. The default
    /// ignores both values and fills with a sharp edge.
    fn set_shadow_extent(&mut self, radius: i32, spread: i32) {
        let _ = (radius, spread);
    }

    fn fill_content(&mut self, content: &Self::Content) -> Result<(), Self::Error>;
}

/// Scoped `save` / `restore` pair.
///
/// `restore` runs on drop, so early returns through `?` still leave the
/// target's state stack balanced.
pub struct SavedState<'a, T: DrawTarget + ?Sized> {
    target: &'a mut T,
}

impl<'a, T: DrawTarget + ?Sized> SavedState<'a, T> {
    pub fn new(target: &'a mut T) -> Self {
        target.save();
        Self { target }
    }
}

impl<T: DrawTarget + ?Sized> Deref for SavedState<'_, T> {
    type Target = T;
    #[inline]
    fn deref(&self) -> &T {
        self.target
    }
}

impl<T: DrawTarget + ?Sized> DerefMut for SavedState<'_, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        self.target
    }
}

impl<T: DrawTarget + ?Sized> Drop for SavedState<'_, T> {
    fn drop(&mut self) {
        self.target.restore();
    }
}
