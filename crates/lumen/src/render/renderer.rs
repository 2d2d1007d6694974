//! Pre-compiled template renderer.

use std::collections::HashMap;

use minijinja::{Environment, Value};
use serde::Serialize;

use super::filters::register_filters;
use super::output::OutputMode;
use super::templates::BUILTIN_TEMPLATES;
use crate::error::LayoutError;
use crate::theme::{AdaptivePalette, ColorMode};

/// Context variable holding the applied mode, `"light"` or `"dark"`.
pub const COLOR_MODE_VAR: &str = "color_mode";

/// A renderer with the layout templates pre-registered.
///
/// Templates are compiled once per colour mode; the `style` filter of each
/// environment is bound to that mode's palette, so choosing the mode at
/// render time chooses the colours.
///
/// # Example
///
/// ```rust
/// use lumen::{AdaptivePalette, ColorMode, OutputMode, Renderer};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Greeting { name: String }
///
/// let mut renderer = Renderer::with_output(AdaptivePalette::default(), OutputMode::Text).unwrap();
/// renderer.add_template("hello", r#"Hi {{ name | style("accent") }}"#).unwrap();
///
/// let out = renderer
///     .render("hello", ColorMode::Dark, &Greeting { name: "Ada".into() })
///     .unwrap();
/// assert_eq!(out, "Hi Ada");
/// ```
#[derive(Debug, Clone)]
pub struct Renderer {
    light: Environment<'static>,
    dark: Environment<'static>,
}

impl Renderer {
    /// Creates a renderer with automatic colour detection.
    ///
    /// # Errors
    ///
    /// Returns an error if any palette alias is dangling or cyclic.
    pub fn new(palette: AdaptivePalette) -> Result<Self, LayoutError> {
        Self::with_output(palette, OutputMode::Auto)
    }

    /// Creates a renderer with an explicit output mode.
    pub fn with_output(palette: AdaptivePalette, mode: OutputMode) -> Result<Self, LayoutError> {
        palette.validate()?;

        let mut light = Environment::new();
        register_filters(&mut light, palette.resolve(ColorMode::Light), mode);
        let mut dark = Environment::new();
        register_filters(&mut dark, palette.resolve(ColorMode::Dark), mode);

        let mut renderer = Self { light, dark };
        for (name, source) in BUILTIN_TEMPLATES {
            renderer.add_template(name, source)?;
        }
        Ok(renderer)
    }

    /// Registers a named template, compiling it immediately.
    ///
    /// Registering a built-in name (`root`, `auth`) replaces that layout.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), LayoutError> {
        for env in [&mut self.light, &mut self.dark] {
            env.add_template_owned(name.to_string(), source.to_string())?;
        }
        Ok(())
    }

    /// Renders a registered template in the given colour mode.
    ///
    /// `data` must serialize to a map (or unit). [`COLOR_MODE_VAR`] is set
    /// from `mode` and overrides a field of the same name.
    pub fn render<T: Serialize>(
        &self,
        name: &str,
        mode: ColorMode,
        data: &T,
    ) -> Result<String, LayoutError> {
        let env = match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        };

        let mut context: HashMap<String, Value> = HashMap::new();
        if let serde_json::Value::Object(map) = serde_json::to_value(data)? {
            for (key, value) in map {
                context.insert(key, Value::from_serialize(&value));
            }
        }
        context.insert(COLOR_MODE_VAR.to_string(), Value::from(mode.as_str()));

        let tmpl = env.get_template(name)?;
        Ok(tmpl.render(&context)?)
    }
}
