//! Palette validation errors.

/// Error returned when a palette's aliases do not resolve.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    /// An alias references a style that doesn't exist
    #[error("style '{from}' aliases non-existent style '{to}'")]
    UnresolvedAlias { from: String, to: String },
    /// A cycle was detected in alias resolution
    #[error("cycle detected in style aliases: {}", path.join(" -> "))]
    CycleDetected { path: Vec<String> },
}
