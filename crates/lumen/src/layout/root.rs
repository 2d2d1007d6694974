//! Root layout.

use log::debug;
use serde::Serialize;

use super::outlet::Outlet;
use crate::config::ThemeConfig;
use crate::error::LayoutError;
use crate::provider::ThemeProvider;
use crate::render::{Renderer, ROOT_TEMPLATE};
use crate::storage::PreferenceStore;
use crate::theme::{AdaptivePalette, HostPreference};

#[derive(Serialize)]
struct RootData {
    outlet: String,
}

/// The application root: mounts the theme provider and renders the outlet.
///
/// Configuration is static: a `system` default persisted under
/// `"<app>-theme"`. The outlet is the only dynamic child.
///
/// # Example
///
/// ```rust
/// use lumen::{ColorMode, ManualPreference, MemoryStore, RootLayout, StaticOutlet};
///
/// let root = RootLayout::new("tanstack-ui").unwrap();
/// assert_eq!(root.config().storage_key, "tanstack-ui-theme");
///
/// let provider = root.mount(
///     Box::new(MemoryStore::new()),
///     Box::new(ManualPreference::new(ColorMode::Dark)),
/// );
/// let page = root.render(&provider, &StaticOutlet::new("Home")).unwrap();
/// assert_eq!(page, "Home");
/// ```
#[derive(Debug, Clone)]
pub struct RootLayout {
    config: ThemeConfig,
    renderer: Renderer,
}

impl RootLayout {
    /// Builds the root for `app_name` with the built-in palettes.
    pub fn new(app_name: &str) -> Result<Self, LayoutError> {
        let renderer = Renderer::new(AdaptivePalette::default())?;
        Ok(Self::with_renderer(ThemeConfig::for_app(app_name), renderer))
    }

    pub fn with_renderer(config: ThemeConfig, renderer: Renderer) -> Self {
        Self { config, renderer }
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Creates the provider, loading the persisted preference.
    pub fn mount(
        &self,
        storage: Box<dyn PreferenceStore>,
        host: Box<dyn HostPreference>,
    ) -> ThemeProvider {
        debug!("mounting root layout (key '{}')", self.config.storage_key);
        ThemeProvider::new(&self.config, storage, host)
    }

    /// Renders the outlet inside the themed root.
    pub fn render(
        &self,
        provider: &ThemeProvider,
        outlet: &dyn Outlet,
    ) -> Result<String, LayoutError> {
        let content = outlet.render(provider)?;
        self.renderer.render(
            ROOT_TEMPLATE,
            provider.document().color_mode(),
            &RootData { outlet: content },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::StaticOutlet;
    use crate::provider::ThemeContext;
    use crate::storage::MemoryStore;
    use crate::theme::{ColorMode, ManualPreference, Theme};

    #[test]
    fn test_static_configuration() {
        let root = RootLayout::new("tanstack-ui").unwrap();
        assert_eq!(root.config().default_theme, Theme::System);
        assert_eq!(root.config().storage_key, "tanstack-ui-theme");
    }

    #[test]
    fn test_mount_reads_persisted_theme() {
        let root = RootLayout::new("app").unwrap();
        let storage = MemoryStore::new().with_value("app-theme", "dark");
        let provider = root.mount(Box::new(storage), Box::new(ManualPreference::default()));
        assert_eq!(provider.theme(), Theme::Dark);
    }

    #[test]
    fn test_render_is_exactly_the_outlet() {
        let root = RootLayout::new("app").unwrap();
        let provider = root.mount(
            Box::new(MemoryStore::new()),
            Box::new(ManualPreference::default()),
        );

        let out = root.render(&provider, &StaticOutlet::new("line one\nline two")).unwrap();
        assert_eq!(out, "line one\nline two");
    }

    #[test]
    fn test_outlet_sees_provider_context() {
        let root = RootLayout::new("app").unwrap();
        let provider = root.mount(
            Box::new(MemoryStore::new()),
            Box::new(ManualPreference::new(ColorMode::Dark)),
        );

        let outlet = |ctx: &dyn ThemeContext| -> Result<String, LayoutError> {
            Ok(format!("{} / {}", ctx.theme(), ctx.applied()))
        };
        assert_eq!(root.render(&provider, &outlet).unwrap(), "system / dark");
    }
}
