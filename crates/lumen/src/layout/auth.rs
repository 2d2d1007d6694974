//! Authentication-page layout.

use serde::Serialize;

use super::outlet::Outlet;
use crate::error::LayoutError;
use crate::provider::ThemeContext;
use crate::render::{Renderer, AUTH_TEMPLATE};
use crate::toggle::ThemeToggle;

/// Column width used when none is configured.
pub const DEFAULT_AUTH_WIDTH: usize = 60;

#[derive(Serialize)]
struct AuthData<'a> {
    toggle: String,
    lines: Vec<&'a str>,
    width: usize,
}

/// A centered single-column page with the theme toggle pinned to the
/// top-right corner.
///
/// Renders explicit content when given, otherwise whatever the outlet
/// produces. The toggle is rendered on either path.
#[derive(Debug, Clone)]
pub struct AuthLayout {
    renderer: Renderer,
    toggle: ThemeToggle,
    width: usize,
}

impl AuthLayout {
    pub fn new(renderer: Renderer) -> Self {
        Self {
            renderer,
            toggle: ThemeToggle::default(),
            width: DEFAULT_AUTH_WIDTH,
        }
    }

    pub fn with_toggle(mut self, toggle: ThemeToggle) -> Self {
        self.toggle = toggle;
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn toggle(&self) -> &ThemeToggle {
        &self.toggle
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Handles an activation of the pinned toggle.
    pub fn activate_toggle(&self, ctx: &mut dyn ThemeContext) {
        self.toggle.activate(ctx);
    }

    pub fn render(
        &self,
        ctx: &dyn ThemeContext,
        outlet: &dyn Outlet,
        content: Option<&str>,
    ) -> Result<String, LayoutError> {
        let body = match content {
            Some(content) => content.to_string(),
            None => outlet.render(ctx)?,
        };
        let data = AuthData {
            toggle: self.toggle.label(ctx),
            lines: body.lines().collect(),
            width: self.width,
        };
        self.renderer.render(AUTH_TEMPLATE, ctx.applied(), &data)
    }

    /// Binds the layout to its content so it can sit in another layout's outlet.
    pub fn page<'a>(&'a self, outlet: &'a dyn Outlet, content: Option<&'a str>) -> AuthPage<'a> {
        AuthPage {
            layout: self,
            outlet,
            content,
        }
    }
}

/// An [`AuthLayout`] bound to its content, usable as an [`Outlet`].
pub struct AuthPage<'a> {
    layout: &'a AuthLayout,
    outlet: &'a dyn Outlet,
    content: Option<&'a str>,
}

impl Outlet for AuthPage<'_> {
    fn render(&self, ctx: &dyn ThemeContext) -> Result<String, LayoutError> {
        self.layout.render(ctx, self.outlet, self.content)
    }
}
