//! The router-provided content region.

use crate::error::LayoutError;
use crate::provider::ThemeContext;

/// Produces the content for the current navigation state.
///
/// Layouts impose no other contract on the router. Closures taking the
/// theme context implement this trait, as does [`StaticOutlet`].
pub trait Outlet {
    fn render(&self, ctx: &dyn ThemeContext) -> Result<String, LayoutError>;
}

impl<F> Outlet for F
where
    F: Fn(&dyn ThemeContext) -> Result<String, LayoutError>,
{
    fn render(&self, ctx: &dyn ThemeContext) -> Result<String, LayoutError> {
        self(ctx)
    }
}

/// An outlet whose content never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticOutlet(pub String);

impl StaticOutlet {
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }
}

impl Outlet for StaticOutlet {
    fn render(&self, _ctx: &dyn ThemeContext) -> Result<String, LayoutError> {
        Ok(self.0.clone())
    }
}
