use std::fmt;
use std::rc::Rc;

use crate::coords::Vec2;
use crate::paint::Color;
use crate::style::SymbolicColorRef;

/// Color of a single shadow layer.
#[derive(Debug, Clone)]
pub enum ShadowColor {
    /// Resolved, theme-independent color.
    Concrete(Color),
    /// Theme-dependent color awaiting [`Shadow::resolve`](super::Shadow::resolve).
    Symbolic(SymbolicColorRef),
}

impl ShadowColor {
    #[inline]
    pub fn is_concrete(&self) -> bool {
        matches!(self, ShadowColor::Concrete(_))
    }
}

impl PartialEq for ShadowColor {
    /// Concrete colors compare by value, symbolic colors by identity.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ShadowColor::Concrete(a), ShadowColor::Concrete(b)) => a == b,
            (ShadowColor::Symbolic(a), ShadowColor::Symbolic(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for ShadowColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShadowColor::Concrete(color) => fmt::Display::fmt(color, f),
            ShadowColor::Symbolic(color) => fmt::Display::fmt(color, f),
        }
    }
}

/// One shadow: offset, blur radius, spread, inset flag and color.
///
/// Immutable once built. Layers are owned by exactly one [`Shadow`](super::Shadow).
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowLayer {
    hoffset: i32,
    voffset: i32,
    radius: i32,
    spread: i32,
    inset: bool,
    color: ShadowColor,
}

impl ShadowLayer {
    pub(crate) fn new(
        hoffset: i32,
        voffset: i32,
        radius: i32,
        spread: i32,
        inset: bool,
        color: ShadowColor,
    ) -> Self {
        Self { hoffset, voffset, radius, spread, inset, color }
    }

    /// Same geometry, concrete `color`.
    pub(crate) fn with_concrete(&self, color: Color) -> Self {
        Self { color: ShadowColor::Concrete(color), ..*self }
    }

    #[inline]
    pub fn hoffset(&self) -> i32 {
        self.hoffset
    }

    #[inline]
    pub fn voffset(&self) -> i32 {
        self.voffset
    }

    /// Displacement as a vector.
    #[inline]
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.hoffset as f32, self.voffset as f32)
    }

    /// Blur radius. `0` is a sharp edge.
    #[inline]
    pub fn radius(&self) -> i32 {
        self.radius
    }

    #[inline]
    pub fn spread(&self) -> i32 {
        self.spread
    }

    #[inline]
    pub fn is_inset(&self) -> bool {
        self.inset
    }

    #[inline]
    pub fn color(&self) -> &ShadowColor {
        &self.color
    }

    /// The layer's color if it has been resolved.
    #[inline]
    pub fn concrete_color(&self) -> Option<Color> {
        match self.color {
            ShadowColor::Concrete(color) => Some(color),
            ShadowColor::Symbolic(_) => None,
        }
    }
}

/// Canonical form: `[inset ]<h> <v> [<radius> ][<spread> ]<color>`.
impl fmt::Display for ShadowLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inset {
            f.write_str("inset ")?;
        }
        write!(f, "{} {} ", self.hoffset, self.voffset)?;
        if self.radius != 0 {
            write!(f, "{} ", self.radius)?;
        }
        if self.spread != 0 {
            write!(f, "{} ", self.spread)?;
        }
        fmt::Display::fmt(&self.color, f)
    }
}
