use crate::coords::Vec2;
use crate::draw::{DrawTarget, SavedState};

use super::Shadow;

impl Shadow {
    /// Composites every layer onto `target`, each as a copy of `content`
    /// offset by the layer's displacement and filled with its color.
    ///
    /// Layers paint back-to-front: the last declared layer first, the first
    /// declared layer last (on top). Each layer runs inside its own
    /// save/restore scope, and the current point is back where it started
    /// afterwards. With no current point, painting starts at `(0, 0)`.
    ///
    /// Blur radius and spread are forwarded via
    /// [`DrawTarget::set_shadow_extent`]; rasterizing them is up to the target.
    ///
    /// # Panics
    /// Panics if the shadow has not been resolved.
    pub fn paint_behind<T>(&self, target: &mut T, content: &T::Content) -> Result<(), T::Error>
    where
        T: DrawTarget + ?Sized,
    {
        assert!(self.resolved, "cannot paint an unresolved shadow; call `resolve` first");

        if target.current_point().is_none() {
            target.move_to(Vec2::zero());
        }

        for layer in self.layers.iter().rev() {
            let Some(color) = layer.concrete_color() else {
                unreachable!("resolved shadow holds a symbolic color");
            };
            log::trace!("painting shadow layer `{}`", layer);

            let offset = layer.offset();
            let mut state = SavedState::new(&mut *target);
            state.rel_move_to(offset);
            state.set_shadow_extent(layer.radius(), layer.spread());
            state.set_source_color(color);
            let filled = state.fill_content(content);
            state.rel_move_to(-offset);
            filled?;
        }

        Ok(())
    }
}
