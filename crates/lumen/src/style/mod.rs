//! Named console styles and aliases.
//!
//! - [`StyleValue`]: a style that is either concrete or an alias
//! - [`Styles`]: a registry of named styles
//! - [`PaletteError`]: errors from alias validation
//!
//! Aliases let layouts refer to semantic names (`toggle`, `body`) that each
//! palette maps onto its own concrete styles.

mod error;
mod registry;
mod value;

pub use error::PaletteError;
pub use registry::{Styles, DEFAULT_MISSING_STYLE_INDICATOR};
pub use value::StyleValue;
