//! Theme state and its persistence.

use log::{debug, warn};

use crate::config::ThemeConfig;
use crate::storage::PreferenceStore;
use crate::theme::Theme;

/// The current preference and the key it is persisted under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeState {
    pub theme: Theme,
    pub storage_key: String,
}

/// Owns [`ThemeState`] and keeps it in step with a [`PreferenceStore`].
///
/// Storage failures never surface: a failed read is treated as "nothing
/// stored" and a failed write still updates the in-memory value.
pub struct ThemeStore {
    state: ThemeState,
    storage: Box<dyn PreferenceStore>,
}

impl ThemeStore {
    /// Loads the persisted theme, falling back to `config.default_theme`
    /// when nothing valid is stored.
    pub fn load(config: &ThemeConfig, storage: Box<dyn PreferenceStore>) -> Self {
        let theme = read_persisted(storage.as_ref(), &config.storage_key)
            .unwrap_or(config.default_theme);
        debug!("loaded theme '{}' for key '{}'", theme, config.storage_key);
        Self {
            state: ThemeState {
                theme,
                storage_key: config.storage_key.clone(),
            },
            storage,
        }
    }

    pub fn theme(&self) -> Theme {
        self.state.theme
    }

    pub fn storage_key(&self) -> &str {
        &self.state.storage_key
    }

    pub fn state(&self) -> &ThemeState {
        &self.state
    }

    pub fn storage(&self) -> &dyn PreferenceStore {
        self.storage.as_ref()
    }

    /// Releases the underlying storage, e.g. to reload from it.
    pub fn into_storage(self) -> Box<dyn PreferenceStore> {
        self.storage
    }

    /// Persists `theme`, then updates the in-memory state.
    pub(crate) fn set(&mut self, theme: Theme) {
        if let Err(e) = self.storage.set(&self.state.storage_key, theme.as_str()) {
            warn!(
                "could not persist theme '{}' under '{}': {}",
                theme, self.state.storage_key, e
            );
        }
        self.state.theme = theme;
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

fn read_persisted(storage: &dyn PreferenceStore, key: &str) -> Option<Theme> {
    match storage.get(key) {
        Ok(Some(raw)) => match raw.parse() {
            Ok(theme) => Some(theme),
            Err(e) => {
                warn!("ignoring stored value under '{}': {}", key, e);
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            warn!("could not read theme under '{}': {}", key, e);
            None
        }
    }
}
