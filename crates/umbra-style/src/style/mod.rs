//! Theme-side collaborators of shadow values.
//!
//! - [`SymbolicColor`]: colors that need a lookup context to become concrete
//! - [`StyleProperties`]: the lookup context itself

mod properties;
mod symbolic;

pub use properties::StyleProperties;
pub use symbolic::{LiteralColor, NamedColor, SymbolicColor, SymbolicColorRef};
