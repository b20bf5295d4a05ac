//! Lexer, parser, and AST for CSS-like **shadow values**.
//!
//! This crate is intentionally dependency-free so it can be consumed by
//! theme linters and editors without pulling in the style engine.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `ShadowValue`, `LayerDecl`, `ColorExpr` |
//! | [`error`] | `ParseError` |
//! | [`lexer`] | `Lexer`, `Token` |
//! | [`parser`] | `parse_shadow` and `parse_color` entry points |
//!
//! # Quick start
//!
//! ```rust
//! use umbra_css::parse_shadow;
//!
//! let value = parse_shadow("inset 0 1 2 rgba(0,0,0,0.5), 1 1 @shadow").unwrap();
//! assert_eq!(value.layers.len(), 2);
//! assert!(value.layers[0].inset);
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{ColorExpr, LayerDecl, ShadowValue};
pub use error::ParseError;
pub use parser::{parse_color, parse_shadow};

#[cfg(test)]
mod parse_tests {
    use super::*;

    fn ok(src: &str) -> ShadowValue { parse_shadow(src).unwrap() }
    fn err(src: &str) -> ParseError { parse_shadow(src).unwrap_err() }
    fn layer(src: &str) -> LayerDecl {
        let mut value = ok(src);
        assert_eq!(value.layers.len(), 1, "expected a single layer in {:?}", src);
        value.layers.remove(0)
    }

    // ── layers ────────────────────────────────────────────────────────────

    #[test] fn none_keyword() { assert!(ok("none").is_none()); }
    #[test] fn none_is_case_insensitive() { assert!(ok("  NONE ").is_none()); }

    #[test]
    fn offsets_only() {
        let l = layer("2 3 black");
        assert_eq!((l.hoffset, l.voffset, l.radius, l.spread), (2, 3, 0, 0));
        assert!(!l.inset);
        assert_eq!(l.color, ColorExpr::rgba(0, 0, 0, 1.0));
    }

    #[test]
    fn radius_and_spread() {
        let l = layer("-1 2 4 5 #ff0000");
        assert_eq!((l.hoffset, l.voffset, l.radius, l.spread), (-1, 2, 4, 5));
        assert_eq!(l.color, ColorExpr::rgba(255, 0, 0, 1.0));
    }

    #[test]
    fn inset_prefix() {
        assert!(layer("inset 1 1 @shade").inset);
    }

    #[test]
    fn px_suffix() {
        let l = layer("2px -3px 4px black");
        assert_eq!((l.hoffset, l.voffset, l.radius), (2, -3, 4));
    }

    #[test]
    fn fractional_lengths_truncate() {
        let l = layer("1.9 -1.9 2.5 black");
        assert_eq!((l.hoffset, l.voffset, l.radius), (1, -1, 2));
    }

    #[test]
    fn multiple_layers_keep_order() {
        let value = ok("1 1 @first, inset 2 2 @second,3 3 @third");
        let names: Vec<_> = value.layers.iter().map(|l| l.color.clone()).collect();
        assert_eq!(names, vec![
            ColorExpr::Named("first".into()),
            ColorExpr::Named("second".into()),
            ColorExpr::Named("third".into()),
        ]);
        assert!(value.layers[1].inset);
    }

    // ── colors ────────────────────────────────────────────────────────────

    #[test]
    fn color_functions() {
        assert_eq!(parse_color("rgb(10, 20, 30)").unwrap(), ColorExpr::rgba(10, 20, 30, 1.0));
        assert_eq!(parse_color("rgba(0,0,0,0.5)").unwrap(), ColorExpr::rgba(0, 0, 0, 0.5));
        assert_eq!(parse_color("RGBA(300, -4, 7.6, 2)").unwrap(), ColorExpr::rgba(255, 0, 8, 1.0));
    }

    #[test]
    fn color_hex_forms() {
        assert_eq!(parse_color("#fff").unwrap(), ColorExpr::rgba(255, 255, 255, 1.0));
        assert_eq!(parse_color("#336699").unwrap(), ColorExpr::rgba(0x33, 0x66, 0x99, 1.0));
        assert_eq!(parse_color("#00000000").unwrap(), ColorExpr::rgba(0, 0, 0, 0.0));
    }

    #[test]
    fn color_named_reference() {
        assert_eq!(parse_color("@theme-fg_2").unwrap(), ColorExpr::Named("theme-fg_2".into()));
    }

    #[test]
    fn color_keywords() {
        assert_eq!(parse_color("transparent").unwrap(), ColorExpr::rgba(0, 0, 0, 0.0));
        assert_eq!(parse_color("White").unwrap(), ColorExpr::rgba(255, 255, 255, 1.0));
    }

    // ── errors ────────────────────────────────────────────────────────────

    #[test] fn err_empty() { err(""); }
    #[test] fn err_single_offset() { err("1 black"); }
    #[test] fn err_missing_color() { err("1 1 2"); }
    #[test] fn err_too_many_lengths() { err("1 1 1 1 1 black"); }
    #[test] fn err_negative_radius() { err("1 1 -2 black"); }
    #[test] fn err_unknown_unit() { err("1em 1 black"); }
    #[test] fn err_bad_hex() { err("1 1 #abcd"); }
    #[test] fn err_trailing_comma() { err("1 1 black,"); }
    #[test] fn err_rgb_arity() { err("1 1 rgb(1, 2, 3, 0.5)"); }
    #[test] fn err_unknown_color() { err("1 1 mauve"); }
    #[test] fn err_none_with_layers() { err("none, 1 1 black"); }
    #[test] fn err_color_trailing_tokens() { parse_color("black white").unwrap_err(); }

    #[test]
    fn error_reports_column() {
        let e = err("1 1 2 3 4 black");
        assert_eq!(e.col, 9);
        assert!(e.to_string().contains("column 9"));
    }
}
