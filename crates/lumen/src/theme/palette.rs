//! Palettes: style collections for one colour mode, and light/dark pairs.

use console::Style;
use once_cell::sync::Lazy;

use super::mode::ColorMode;
use crate::style::{PaletteError, StyleValue, Styles};

/// A named collection of styles used when rendering in one colour mode.
///
/// # Example
///
/// ```rust
/// use lumen::Palette;
/// use console::Style;
///
/// let palette = Palette::new()
///     .add("muted", Style::new().dim())
///     .add("accent", Style::new().cyan().bold())
///     .add("toggle", "accent");
/// assert!(palette.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Palette {
    pub(crate) styles: Styles,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_styles(styles: Styles) -> Self {
        Self { styles }
    }

    /// Adds a named style or alias, returning the palette for chaining.
    pub fn add<V: Into<StyleValue>>(mut self, name: &str, value: V) -> Self {
        self.styles = self.styles.add(name, value);
        self
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    /// Validates that all style aliases in this palette resolve.
    pub fn validate(&self) -> Result<(), PaletteError> {
        self.styles.validate()
    }
}

/// A light/dark pair of palettes, selected by the applied colour mode.
#[derive(Debug, Clone)]
pub struct AdaptivePalette {
    light: Palette,
    dark: Palette,
}

impl AdaptivePalette {
    pub fn new(light: Palette, dark: Palette) -> Self {
        Self { light, dark }
    }

    pub fn resolve(&self, mode: ColorMode) -> &Palette {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }

    pub fn validate(&self) -> Result<(), PaletteError> {
        self.light.validate()?;
        self.dark.validate()
    }
}

static BUILTIN: Lazy<AdaptivePalette> = Lazy::new(|| {
    let light = Palette::new()
        .add("heading", Style::new().black().bold())
        .add("body", Style::new().black())
        .add("muted", Style::new().black().dim())
        .add("accent", Style::new().blue().bold())
        .add("toggle", "accent");
    let dark = Palette::new()
        .add("heading", Style::new().white().bold())
        .add("body", Style::new().white())
        .add("muted", Style::new().white().dim())
        .add("accent", Style::new().yellow().bold())
        .add("toggle", "accent");
    AdaptivePalette::new(light, dark)
});

impl AdaptivePalette {
    /// The built-in palettes used by the layouts.
    ///
    /// Both define `heading`, `body`, `muted`, `accent` and `toggle`.
    pub fn builtin() -> &'static AdaptivePalette {
        &BUILTIN
    }
}

impl Default for AdaptivePalette {
    fn default() -> Self {
        Self::builtin().clone()
    }
}
