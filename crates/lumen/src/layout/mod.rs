//! Page layouts.
//!
//! - [`RootLayout`]: mounts the provider and renders the router outlet
//! - [`AuthLayout`]: a centered single-column page with a pinned theme toggle
//! - [`Outlet`]: the content region supplied by the routing collaborator

mod auth;
mod outlet;
mod root;

pub use auth::{AuthLayout, AuthPage, DEFAULT_AUTH_WIDTH};
pub use outlet::{Outlet, StaticOutlet};
pub use root::RootLayout;
