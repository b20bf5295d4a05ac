//! Shadows from CSS-like source text.
//!
//! Syntax lives in `umbra-css`; this module turns its AST into unresolved
//! [`Shadow`]s. Every color becomes a symbolic color, literals included,
//! so resolution is the single place concrete colors are produced.

use std::rc::Rc;

use umbra_css::ColorExpr;

pub use umbra_css::ParseError;

use crate::paint::Color;
use crate::shadow::Shadow;
use crate::style::{LiteralColor, NamedColor, SymbolicColorRef};

/// Parses a shadow value such as `"0 1 2 @shadow, inset 0 0 1 rgba(0,0,0,0.5)"`.
///
/// `none` yields an empty shadow. Equal color expressions within one value
/// share a single symbolic color.
pub fn parse_shadow(src: &str) -> Result<Rc<Shadow>, ParseError> {
    let value = umbra_css::parse_shadow(src)?;

    let mut colors: Vec<(ColorExpr, SymbolicColorRef)> = Vec::new();
    let mut builder = Shadow::builder();
    for decl in value.layers {
        let shared = colors
            .iter()
            .find(|(expr, _)| *expr == decl.color)
            .map(|(_, color)| Rc::clone(color));
        let color = match shared {
            Some(color) => color,
            None => {
                let color = symbolic_color(&decl.color);
                colors.push((decl.color, Rc::clone(&color)));
                color
            }
        };
        builder.append(decl.hoffset, decl.voffset, decl.radius, decl.spread, decl.inset, color);
    }

    log::debug!("parsed shadow with {} layer(s)", builder.len());
    Ok(builder.build())
}

/// Parses a single color such as `"#336699"` or `"@accent"`.
pub fn parse_color(src: &str) -> Result<SymbolicColorRef, ParseError> {
    umbra_css::parse_color(src).map(|expr| symbolic_color(&expr))
}

/// Maps a color expression onto the symbolic colors this crate ships.
pub fn symbolic_color(expr: &ColorExpr) -> SymbolicColorRef {
    match expr {
        ColorExpr::Rgba { r, g, b, a } => Rc::new(LiteralColor(Color::from_css_rgba(*r, *g, *b, *a))),
        ColorExpr::Named(name) => Rc::new(NamedColor::new(name.clone())),
    }
}
