//! Style registry with alias resolution.

use std::collections::HashMap;

use console::Style;

use super::error::PaletteError;
use super::value::StyleValue;

/// Prefix written before text whose style name is not registered.
pub const DEFAULT_MISSING_STYLE_INDICATOR: &str = "(!?)";

/// A registry of named styles.
///
/// # Example
///
/// ```rust
/// use lumen::style::Styles;
/// use console::Style;
///
/// let styles = Styles::new()
///     .add("accent", Style::new().cyan())
///     .add("toggle", "accent");
///
/// assert!(styles.validate().is_ok());
/// assert_eq!(styles.apply_with_mode("toggle", "x", false), "x");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Styles {
    styles: HashMap<String, StyleValue>,
}

impl Styles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style, returning the updated registry for chaining.
    pub fn add<V: Into<StyleValue>>(mut self, name: &str, value: V) -> Self {
        self.styles.insert(name.to_string(), value.into());
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Follows aliases to a concrete style.
    ///
    /// Returns `None` when the name, or any alias on the way, is missing or
    /// part of a cycle.
    pub fn resolve(&self, name: &str) -> Option<&Style> {
        let mut current = name;
        // A chain longer than the registry must revisit a name.
        for _ in 0..=self.styles.len() {
            match self.styles.get(current)? {
                StyleValue::Concrete(style) => return Some(style),
                StyleValue::Alias(target) => current = target.as_str(),
            }
        }
        None
    }

    /// Checks that every alias resolves to a concrete style.
    pub fn validate(&self) -> Result<(), PaletteError> {
        let mut names: Vec<&String> = self.styles.keys().collect();
        names.sort();

        for name in names {
            let mut path = vec![name.clone()];
            let mut current = name;
            while let Some(StyleValue::Alias(target)) = self.styles.get(current) {
                if !self.styles.contains_key(target) {
                    return Err(PaletteError::UnresolvedAlias {
                        from: current.clone(),
                        to: target.clone(),
                    });
                }
                if path.contains(target) {
                    path.push(target.clone());
                    return Err(PaletteError::CycleDetected { path });
                }
                path.push(target.clone());
                current = target;
            }
        }
        Ok(())
    }

    /// Applies the named style to `text`.
    ///
    /// With `use_color` off the text is returned unstyled. Unknown names are
    /// prefixed with [`DEFAULT_MISSING_STYLE_INDICATOR`] in either case.
    pub fn apply_with_mode(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.resolve(name) {
            Some(style) if use_color => style
                .clone()
                .force_styling(true)
                .apply_to(text)
                .to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", DEFAULT_MISSING_STYLE_INDICATOR, text),
        }
    }
}
