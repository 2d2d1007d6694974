//! Theme state ownership and propagation.
//!
//! - [`ThemeStore`]: the persisted preference
//! - [`ThemeProvider`]: resolves, applies and broadcasts it
//! - [`ThemeContext`]: the narrow capability handed to components

#[allow(clippy::module_inception)]
mod provider;
mod store;

pub use provider::{DocumentRoot, Subscription, ThemeChange, ThemeContext, ThemeProvider};
pub use store::{ThemeState, ThemeStore};
