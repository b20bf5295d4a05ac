use std::fmt;

/// A symbolic color could not be evaluated against the given properties.
///
/// Resolution is all-or-nothing, so the error names the first layer that
/// failed; no partially resolved shadow exists alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveError {
    /// Index of the failing layer, in append order.
    pub layer: usize,
    /// `Display` form of the symbolic color that failed.
    pub color: String,
}

impl ResolveError {
    pub(crate) fn new(layer: usize, color: impl Into<String>) -> Self {
        Self { layer, color: color.into() }
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot resolve shadow color {} (layer {})", self.color, self.layer)
    }
}

impl std::error::Error for ResolveError {}
