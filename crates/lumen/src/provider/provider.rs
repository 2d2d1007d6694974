//! The theme provider: resolution, application and change notification.

use log::debug;

use super::store::{ThemeState, ThemeStore};
use crate::config::ThemeConfig;
use crate::storage::PreferenceStore;
use crate::theme::{ColorMode, HostPreference, Theme};

/// The read/write capability layouts and controls receive.
///
/// Components never hold the provider itself; they are handed a
/// `&dyn ThemeContext` (or `&mut` to change the theme) for the duration of
/// one render or one activation.
pub trait ThemeContext {
    /// The selected preference, possibly [`Theme::System`].
    fn theme(&self) -> Theme;

    /// The concrete mode, resolving `system` against the host right now.
    fn resolved(&self) -> ColorMode;

    /// The mode pages are currently styled with.
    ///
    /// Lags [`resolved`](Self::resolved) only while a host change has not
    /// yet been delivered.
    fn applied(&self) -> ColorMode {
        self.resolved()
    }

    fn set_theme(&mut self, theme: Theme);
}

/// Delivered to subscribers after every effective change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeChange {
    pub previous: Theme,
    pub current: Theme,
    pub previous_mode: ColorMode,
    pub mode: ColorMode,
}

impl ThemeChange {
    /// True when the applied colours differ, as opposed to only the preference.
    pub fn mode_changed(&self) -> bool {
        self.previous_mode != self.mode
    }
}

/// Handle returned by [`ThemeProvider::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// The document-level presentation attribute.
///
/// Holds the colour mode every styled fragment of a page is rendered with.
/// Only the provider applies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRoot {
    mode: ColorMode,
    applications: usize,
}

impl DocumentRoot {
    fn new(mode: ColorMode) -> Self {
        Self {
            mode,
            applications: 1,
        }
    }

    pub fn color_mode(&self) -> ColorMode {
        self.mode
    }

    /// The class name a stylesheet would key on: `"light"` or `"dark"`.
    pub fn class(&self) -> &'static str {
        self.mode.as_str()
    }

    /// How many times a mode has been applied, including the initial one.
    pub fn applications(&self) -> usize {
        self.applications
    }

    fn apply(&mut self, mode: ColorMode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        self.applications += 1;
        true
    }
}

type Listener = Box<dyn FnMut(&ThemeChange)>;

/// Owns the theme state for the lifetime of the application root.
///
/// # Example
///
/// ```rust
/// use lumen::{
///     ColorMode, ManualPreference, MemoryStore, Theme, ThemeConfig, ThemeContext, ThemeProvider,
/// };
///
/// let host = ManualPreference::new(ColorMode::Light);
/// let mut provider = ThemeProvider::new(
///     &ThemeConfig::for_app("docs"),
///     Box::new(MemoryStore::new()),
///     Box::new(host.clone()),
/// );
/// assert_eq!(provider.theme(), Theme::System);
/// assert_eq!(provider.document().class(), "light");
///
/// host.set(ColorMode::Dark);
/// provider.host_preference_changed();
/// assert_eq!(provider.document().class(), "dark");
/// ```
pub struct ThemeProvider {
    store: ThemeStore,
    host: Box<dyn HostPreference>,
    document: DocumentRoot,
    listeners: Vec<(Subscription, Listener)>,
    next_subscription: u64,
}

impl ThemeProvider {
    /// Loads the stored preference and applies its resolved mode.
    pub fn new(
        config: &ThemeConfig,
        storage: Box<dyn PreferenceStore>,
        host: Box<dyn HostPreference>,
    ) -> Self {
        Self::from_store(ThemeStore::load(config, storage), host)
    }

    pub fn from_store(store: ThemeStore, host: Box<dyn HostPreference>) -> Self {
        let mode = store.theme().resolve(host.preferred());
        debug!("applying initial colour mode '{}'", mode);
        Self {
            store,
            host,
            document: DocumentRoot::new(mode),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn document(&self) -> &DocumentRoot {
        &self.document
    }

    pub fn state(&self) -> &ThemeState {
        self.store.state()
    }

    pub fn store(&self) -> &ThemeStore {
        &self.store
    }

    /// Gives the store back, e.g. to simulate a reload.
    pub fn into_store(self) -> ThemeStore {
        self.store
    }

    /// Registers `listener` to run after every effective change.
    ///
    /// Listeners run in registration order.
    pub fn subscribe<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut(&ThemeChange) + 'static,
    {
        let id = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != subscription);
        self.listeners.len() != before
    }

    /// Entry point for host colour-scheme change notifications.
    ///
    /// Re-resolves when `system` is selected. Returns whether the applied
    /// mode changed.
    pub fn host_preference_changed(&mut self) -> bool {
        let theme = self.store.theme();
        if theme != Theme::System {
            return false;
        }
        self.commit(theme)
    }

    // Applies the current resolution and notifies if anything changed.
    fn commit(&mut self, previous: Theme) -> bool {
        let previous_mode = self.document.color_mode();
        let current = self.store.theme();
        let mode = self.resolved();

        let applied = self.document.apply(mode);
        if applied {
            debug!("applied colour mode '{}'", mode);
        }
        if previous == current && !applied {
            return false;
        }

        let change = ThemeChange {
            previous,
            current,
            previous_mode,
            mode,
        };
        for (_, listener) in self.listeners.iter_mut() {
            listener(&change);
        }
        applied
    }
}

impl ThemeContext for ThemeProvider {
    fn theme(&self) -> Theme {
        self.store.theme()
    }

    fn resolved(&self) -> ColorMode {
        self.store.theme().resolve(self.host.preferred())
    }

    fn applied(&self) -> ColorMode {
        self.document.color_mode()
    }

    fn set_theme(&mut self, theme: Theme) {
        let previous = self.store.theme();
        debug!("theme '{}' -> '{}'", previous, theme);
        self.store.set(theme);
        self.commit(previous);
    }
}

impl std::fmt::Debug for ThemeProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeProvider")
            .field("store", &self.store)
            .field("document", &self.document)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
