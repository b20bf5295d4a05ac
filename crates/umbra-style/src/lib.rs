//! Umbra style crate.
//!
//! Multi-layer shadow values for a UI theming engine: built with symbolic
//! (theme-dependent) colors, resolved against the theme's properties, then
//! composited back-to-front onto a draw target.
//!
//! ```rust
//! use umbra_style::css::parse_shadow;
//! use umbra_style::paint::Color;
//! use umbra_style::scene::DrawList;
//! use umbra_style::style::StyleProperties;
//!
//! let shadow = parse_shadow("1 1 @shade, 2 2 4 rgba(0,0,0,0.5)").unwrap();
//! let props = StyleProperties::new().with_color("shade", Color::from_srgb_u8(0, 0, 0, 255));
//! let resolved = shadow.resolve(&props).unwrap();
//! assert_eq!(resolved.to_css_string().as_deref(), Some("1 1 rgb(0,0,0), 2 2 4 rgba(0,0,0,0.5)"));
//!
//! let mut list = DrawList::new();
//! resolved.paint_behind(&mut list, "Label").unwrap();
//! assert_eq!(list.fills().count(), 2);
//! ```

pub mod coords;
pub mod css;
pub mod draw;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod shadow;
pub mod style;

mod error;

pub use css::ParseError;
pub use error::ResolveError;
pub use shadow::{Shadow, ShadowBuilder, ShadowColor, ShadowLayer};
