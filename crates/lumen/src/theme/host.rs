//! Host colour-scheme preference.

use std::cell::Cell;
use std::rc::Rc;

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};

use super::mode::ColorMode;

/// Read-only signal for the host's preferred colour scheme.
///
/// Consulted every time a [`Theme::System`](super::Theme::System) preference
/// is resolved. Changes are delivered to the provider through
/// [`ThemeProvider::host_preference_changed`](crate::ThemeProvider::host_preference_changed).
pub trait HostPreference {
    fn preferred(&self) -> ColorMode;
}

/// Asks the operating system, via `dark-light`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsPreference;

impl HostPreference for OsPreference {
    fn preferred(&self) -> ColorMode {
        match detect_os_theme() {
            OsThemeMode::Dark => ColorMode::Dark,
            OsThemeMode::Light => ColorMode::Light,
        }
    }
}

/// A host preference set by hand.
///
/// Clones share the same value, so a test (or a `--host` override) can keep
/// one handle and flip the preference seen by a provider that owns another.
///
/// ```rust
/// use lumen::{ColorMode, HostPreference, ManualPreference};
///
/// let host = ManualPreference::new(ColorMode::Light);
/// let shared = host.clone();
/// shared.set(ColorMode::Dark);
/// assert_eq!(host.preferred(), ColorMode::Dark);
/// ```
#[derive(Debug, Clone)]
pub struct ManualPreference {
    mode: Rc<Cell<ColorMode>>,
}

impl ManualPreference {
    pub fn new(mode: ColorMode) -> Self {
        Self {
            mode: Rc::new(Cell::new(mode)),
        }
    }

    pub fn set(&self, mode: ColorMode) {
        self.mode.set(mode);
    }
}

impl Default for ManualPreference {
    fn default() -> Self {
        Self::new(ColorMode::Light)
    }
}

impl HostPreference for ManualPreference {
    fn preferred(&self) -> ColorMode {
        self.mode.get()
    }
}
