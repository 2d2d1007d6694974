//! The theme toggle control.

use serde::{Deserialize, Serialize};

use crate::provider::ThemeContext;
use crate::theme::{ColorMode, Theme};

/// How an activation picks the next theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TogglePolicy {
    /// `light → dark → system → light`.
    #[default]
    Cycle,
    /// Flip the resolved mode. Never selects `system`; from `system` the
    /// result is the opposite of what the host currently resolves to.
    Binary,
}

/// A stateless control bound to a [`ThemeContext`].
///
/// # Example
///
/// ```rust
/// use lumen::{
///     ManualPreference, MemoryStore, Theme, ThemeConfig, ThemeContext, ThemeProvider, ThemeToggle,
///     TogglePolicy,
/// };
///
/// let mut provider = ThemeProvider::new(
///     &ThemeConfig::new(Theme::Light, "demo-theme"),
///     Box::new(MemoryStore::new()),
///     Box::new(ManualPreference::default()),
/// );
/// let toggle = ThemeToggle::new(TogglePolicy::Binary);
///
/// toggle.activate(&mut provider);
/// toggle.activate(&mut provider);
/// assert_eq!(provider.theme(), Theme::Light);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeToggle {
    policy: TogglePolicy,
}

impl ThemeToggle {
    pub fn new(policy: TogglePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> TogglePolicy {
        self.policy
    }

    /// The theme one activation would select.
    pub fn next_theme(&self, ctx: &dyn ThemeContext) -> Theme {
        match self.policy {
            TogglePolicy::Cycle => ctx.theme().next(),
            TogglePolicy::Binary => Theme::from(ctx.resolved().inverted()),
        }
    }

    /// Makes exactly one `set_theme` call.
    pub fn activate(&self, ctx: &mut dyn ThemeContext) {
        let next = self.next_theme(&*ctx);
        ctx.set_theme(next);
    }

    /// The affordance text, e.g. `[◐ system]`.
    pub fn label(&self, ctx: &dyn ThemeContext) -> String {
        let theme = ctx.theme();
        let icon = match theme {
            Theme::Light => "☀",
            Theme::Dark => "☾",
            Theme::System => match ctx.resolved() {
                ColorMode::Light => "◐",
                ColorMode::Dark => "◑",
            },
        };
        format!("[{} {}]", icon, theme)
    }
}
