//! Theme preference and resolved colour mode.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The resolved colour mode a page is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    /// Returns the lowercase name used as the document class.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    /// Returns the opposite mode.
    pub fn inverted(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user's display mode preference.
///
/// [`Theme::System`] is deferred: it has no colours of its own and is
/// resolved against the host's preferred scheme every time it is read.
///
/// # Example
///
/// ```rust
/// use lumen::{ColorMode, Theme};
///
/// let theme: Theme = "dark".parse().unwrap();
/// assert_eq!(theme.resolve(ColorMode::Light), ColorMode::Dark);
/// assert_eq!(Theme::System.resolve(ColorMode::Light), ColorMode::Light);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    /// All themes, in toggle cycle order.
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];

    /// Returns the literal stored in preference storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    /// Resolves to a concrete mode, consulting `host` only for `System`.
    pub fn resolve(self, host: ColorMode) -> ColorMode {
        match self {
            Theme::Light => ColorMode::Light,
            Theme::Dark => ColorMode::Dark,
            Theme::System => host,
        }
    }

    /// Returns the next theme in the `light → dark → system` cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::System,
            Theme::System => Theme::Light,
        }
    }
}

impl From<ColorMode> for Theme {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Light => Theme::Light,
            ColorMode::Dark => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of `light`, `dark` or `system`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid theme '{0}': expected one of light, dark, system")]
pub struct ParseThemeError(pub String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    // Stored values are exact literals; anything else is treated as invalid.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}
