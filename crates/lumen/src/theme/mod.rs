//! Theme preference, host resolution and palettes.
//!
//! This module provides:
//!
//! - [`Theme`]: the `light` / `dark` / `system` preference
//! - [`ColorMode`]: the concrete mode a preference resolves to
//! - [`HostPreference`]: the host's preferred scheme, used to resolve `system`
//! - [`Palette`] and [`AdaptivePalette`]: styles selected by colour mode

mod host;
mod mode;
mod palette;

pub use host::{HostPreference, ManualPreference, OsPreference};
pub use mode::{ColorMode, ParseThemeError, Theme};
pub use palette::{AdaptivePalette, Palette};
