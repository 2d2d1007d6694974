//! Layout rendering errors.

use crate::style::PaletteError;

/// Error returned when a page cannot be rendered.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("invalid palette: {0}")]
    Palette(#[from] PaletteError),

    #[error("failed to serialize template data: {0}")]
    Data(#[from] serde_json::Error),

    /// The routing collaborator could not produce content.
    #[error("outlet failed: {0}")]
    Outlet(String),
}
