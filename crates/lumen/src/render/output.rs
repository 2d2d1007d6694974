//! Output mode: whether styles are emitted as ANSI escapes.

use serde::{Deserialize, Serialize};

/// Controls whether rendered pages carry terminal styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Style when `console` reports colour support.
    #[default]
    Auto,
    /// Always style.
    Term,
    /// Never style.
    Text,
}

impl OutputMode {
    pub fn should_use_color(self) -> bool {
        match self {
            OutputMode::Auto => console::colors_enabled(),
            OutputMode::Term => true,
            OutputMode::Text => false,
        }
    }
}

impl std::str::FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(OutputMode::Auto),
            "term" => Ok(OutputMode::Term),
            "text" => Ok(OutputMode::Text),
            other => Err(format!("unknown output mode '{}'", other)),
        }
    }
}
