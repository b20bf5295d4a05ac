/// A parsed shadow value.
///
/// An empty layer list is the `none` keyword.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShadowValue {
    pub layers: Vec<LayerDecl>,
}

impl ShadowValue {
    #[inline]
    pub fn is_none(&self) -> bool {
        self.layers.is_empty()
    }
}

/// One comma-separated entry of a shadow value:
/// `[inset] <h> <v> [<radius> [<spread>]] <color>`.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerDecl {
    pub inset: bool,
    pub hoffset: i32,
    pub voffset: i32,
    /// Blur radius. Never negative.
    pub radius: i32,
    pub spread: i32,
    pub color: ColorExpr,
}

/// A color as written in the source, before any theme lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorExpr {
    /// Straight-alpha color: channels in `0..=255`, alpha in `[0, 1]`.
    Rgba { r: u8, g: u8, b: u8, a: f32 },
    /// `@name` reference to a theme color.
    Named(String),
}

impl ColorExpr {
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        ColorExpr::Rgba { r, g, b, a }
    }
}
