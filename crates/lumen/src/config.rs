//! Configuration for the theme store and the layouts.
//!
//! [`ThemeConfig`] is what a [`ThemeProvider`](crate::ThemeProvider) is built
//! from. [`LumenConfig`] is the file-level configuration read by the `lumen`
//! binary; every field has a default, so an empty document is valid.
//!
//! ```yaml
//! app_name: tanstack-ui
//! default_theme: dark
//! toggle: binary
//! width: 60
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::theme::Theme;
use crate::toggle::TogglePolicy;

/// Storage key used when no application name is configured.
pub const DEFAULT_STORAGE_KEY: &str = "lumen-theme";

/// Default theme and storage key for a [`ThemeStore`](crate::ThemeStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub default_theme: Theme,
    pub storage_key: String,
}

impl ThemeConfig {
    pub fn new(default_theme: Theme, storage_key: impl Into<String>) -> Self {
        Self {
            default_theme,
            storage_key: storage_key.into(),
        }
    }

    /// `system` default, persisted under `"<app_name>-theme"`.
    pub fn for_app(app_name: &str) -> Self {
        Self::new(Theme::System, format!("{}-theme", app_name))
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::new(Theme::System, DEFAULT_STORAGE_KEY)
    }
}

/// Error loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config \"{}\": {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Application-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LumenConfig {
    pub app_name: String,
    pub default_theme: Theme,
    /// Overrides the `"<app_name>-theme"` storage key.
    pub storage_key: Option<String>,
    pub toggle: TogglePolicy,
    /// Column width for centered layouts; the terminal width when unset.
    pub width: Option<usize>,
}

impl Default for LumenConfig {
    fn default() -> Self {
        Self {
            app_name: "lumen".to_string(),
            default_theme: Theme::System,
            storage_key: None,
            toggle: TogglePolicy::default(),
            width: None,
        }
    }
}

impl LumenConfig {
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        // serde_yaml reads an empty document as null rather than an empty map.
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Loads a `.json` file as JSON and anything else as YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&source),
            _ => Self::from_yaml_str(&source),
        }
    }

    pub fn theme_config(&self) -> ThemeConfig {
        let storage_key = self
            .storage_key
            .clone()
            .unwrap_or_else(|| format!("{}-theme", self.app_name));
        ThemeConfig::new(self.default_theme, storage_key)
    }
}
