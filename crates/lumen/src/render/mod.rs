//! Template rendering for the layouts.
//!
//! [`Renderer`] wraps MiniJinja with the built-in `root` and `auth`
//! templates and these filters:
//!
//! | Filter | Effect |
//! |--------|--------|
//! | `style(name)` | applies the palette style for the render's colour mode |
//! | `nl` | appends a newline |
//! | `center(width)` | centers by display width, truncating with `…` |
//! | `align_right(width)` | right-aligns by display width |

mod filters;
mod output;
mod renderer;
mod templates;

pub use output::OutputMode;
pub use renderer::{Renderer, COLOR_MODE_VAR};
pub use templates::{AUTH_TEMPLATE, ROOT_TEMPLATE};
