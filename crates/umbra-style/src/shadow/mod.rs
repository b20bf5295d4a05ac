//! Multi-layer shadow values.
//!
//! Lifecycle:
//! 1. build with [`ShadowBuilder`] (or parse, see [`crate::css`]); every
//!    layer carries a symbolic color and the result is unresolved
//! 2. [`Shadow::resolve`] against [`StyleProperties`](crate::style::StyleProperties)
//!    yields a new shadow whose layers are all concrete
//! 3. [`Shadow::paint_behind`] composites the resolved layers onto a
//!    [`DrawTarget`](crate::draw::DrawTarget)
//!
//! Shadows are shared through `Rc` and never mutated after `build`.

mod layer;
mod paint;
mod resolve;

use std::rc::Rc;

pub use layer::{ShadowColor, ShadowLayer};

use crate::style::SymbolicColorRef;

/// An ordered stack of shadow layers.
///
/// Layer order is declaration order: the first layer serializes first and
/// paints on top.
#[derive(Debug, PartialEq)]
pub struct Shadow {
    layers: Vec<ShadowLayer>,
    /// Invariant: `true` iff every layer's color is [`ShadowColor::Concrete`].
    resolved: bool,
}

impl Shadow {
    #[inline]
    pub fn builder() -> ShadowBuilder {
        ShadowBuilder::new()
    }

    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    #[inline]
    pub fn layers(&self) -> &[ShadowLayer] {
        &self.layers
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Canonical CSS form, layers joined with `", "`.
    ///
    /// Returns `None` for a shadow without layers: the property should be
    /// omitted rather than written out empty.
    pub fn to_css_string(&self) -> Option<String> {
        if self.layers.is_empty() {
            return None;
        }
        let parts: Vec<String> = self.layers.iter().map(ShadowLayer::to_string).collect();
        Some(parts.join(", "))
    }
}

/// Accumulates layers for a not-yet-shared [`Shadow`].
#[derive(Debug, Default)]
pub struct ShadowBuilder {
    layers: Vec<ShadowLayer>,
}

impl ShadowBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a layer after all previously appended ones.
    ///
    /// The layer keeps its own handle to `color`.
    pub fn append(
        &mut self,
        hoffset: i32,
        voffset: i32,
        radius: i32,
        spread: i32,
        inset: bool,
        color: SymbolicColorRef,
    ) -> &mut Self {
        self.layers.push(ShadowLayer::new(
            hoffset,
            voffset,
            radius,
            spread,
            inset,
            ShadowColor::Symbolic(color),
        ));
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Freezes the layers into an unresolved, shareable shadow.
    pub fn build(self) -> Rc<Shadow> {
        Rc::new(Shadow { layers: self.layers, resolved: false })
    }
}
