use std::collections::HashMap;

use crate::paint::Color;

/// Property bag a symbolic color is resolved against.
///
/// Holds the theme's named colors (`@accent`, `@shadow`, ...). Shadows pass
/// it through to [`SymbolicColor::resolve`](super::SymbolicColor::resolve)
/// untouched.
#[derive(Debug, Clone, Default)]
pub struct StyleProperties {
    colors: HashMap<String, Color>,
}

impl StyleProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines (or redefines) a named color.
    pub fn set_color(&mut self, name: impl Into<String>, color: Color) {
        self.colors.insert(name.into(), color);
    }

    pub fn with_color(mut self, name: impl Into<String>, color: Color) -> Self {
        self.set_color(name, color);
        self
    }

    pub fn lookup_color(&self, name: &str) -> Option<Color> {
        self.colors.get(name).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
