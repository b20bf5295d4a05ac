use std::fmt;
use std::rc::Rc;

use crate::paint::Color;

use super::StyleProperties;

/// A color whose value depends on the theme, e.g. "the accent color" or
/// "the window background, darkened".
///
/// The evaluation rules live with the implementor; shadows only call
/// [`resolve`](Self::resolve) and print the `Display` form.
pub trait SymbolicColor: fmt::Debug + fmt::Display {
    /// Evaluates the color against `props`.
    ///
    /// Returns `None` when the color cannot be evaluated in this context,
    /// typically because a referenced name is not defined.
    fn resolve(&self, props: &StyleProperties) -> Option<Color>;
}

/// Shared handle to a symbolic color. Layers hold clones of it.
pub type SymbolicColorRef = Rc<dyn SymbolicColor>;

/// A literal color in symbolic position. Always resolves to itself.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LiteralColor(pub Color);

impl SymbolicColor for LiteralColor {
    fn resolve(&self, _props: &StyleProperties) -> Option<Color> {
        Some(self.0)
    }
}

impl fmt::Display for LiteralColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// `@name`: a reference to a named color in [`StyleProperties`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedColor {
    name: String,
}

impl NamedColor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl SymbolicColor for NamedColor {
    fn resolve(&self, props: &StyleProperties) -> Option<Color> {
        props.lookup_color(&self.name)
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name)
    }
}
