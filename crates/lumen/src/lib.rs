//! # Lumen - theme-aware terminal page layouts
//!
//! Lumen renders pages whose colours follow a persisted `light` / `dark` /
//! `system` preference. A [`RootLayout`] mounts a [`ThemeProvider`] once per
//! application; page layouts such as [`AuthLayout`] render inside its outlet
//! and read the theme through the narrow [`ThemeContext`] capability.
//!
//! ## Core Concepts
//!
//! - [`Theme`]: the preference; `system` is resolved against the host
//! - [`ThemeStore`]: owns the preference and persists it through a [`PreferenceStore`]
//! - [`ThemeProvider`]: applies the resolved [`ColorMode`] to the [`DocumentRoot`]
//!   and notifies subscribers
//! - [`ThemeToggle`]: one `set_theme` call per activation
//! - [`Renderer`]: MiniJinja templates styled from an [`AdaptivePalette`]
//!
//! ## Quick Start
//!
//! ```rust
//! use lumen::{
//!     AdaptivePalette, AuthLayout, ColorMode, ManualPreference, MemoryStore, OutputMode,
//!     Renderer, RootLayout, StaticOutlet, Theme, ThemeConfig, ThemeContext,
//! };
//!
//! let renderer = Renderer::with_output(AdaptivePalette::default(), OutputMode::Text).unwrap();
//! let root = RootLayout::with_renderer(ThemeConfig::for_app("shop"), renderer.clone());
//! let auth = AuthLayout::new(renderer).with_width(24);
//!
//! let host = ManualPreference::new(ColorMode::Light);
//! let mut provider = root.mount(Box::new(MemoryStore::new()), Box::new(host.clone()));
//!
//! let router = StaticOutlet::new("Sign in");
//! let page = root.render(&provider, &auth.page(&router, None)).unwrap();
//! assert!(page.contains("Sign in"));
//! assert!(page.contains("[◐ system]"));
//!
//! auth.activate_toggle(&mut provider);
//! assert_eq!(provider.theme(), Theme::Light);
//! ```
//!
//! ## Persistence failures
//!
//! Storage errors are logged through the `log` facade and otherwise
//! ignored: a failed read behaves like an empty store, a failed write still
//! changes the in-memory theme. Rendering never fails because of storage.

pub mod config;
mod error;
pub mod layout;
pub mod provider;
pub mod render;
pub mod storage;
pub mod style;
pub mod theme;
pub mod toggle;
mod util;

pub use config::{ConfigError, LumenConfig, ThemeConfig, DEFAULT_STORAGE_KEY};
pub use error::LayoutError;
pub use layout::{AuthLayout, AuthPage, Outlet, RootLayout, StaticOutlet, DEFAULT_AUTH_WIDTH};
pub use provider::{
    DocumentRoot, Subscription, ThemeChange, ThemeContext, ThemeProvider, ThemeState, ThemeStore,
};
pub use render::{OutputMode, Renderer};
pub use storage::{FileStore, MemoryStore, PreferenceStore, StorageError};
pub use style::PaletteError;
pub use theme::{
    AdaptivePalette, ColorMode, HostPreference, ManualPreference, OsPreference, Palette,
    ParseThemeError, Theme,
};
pub use toggle::{ThemeToggle, TogglePolicy};
pub use util::{pad_center, pad_left, truncate_to_width};
