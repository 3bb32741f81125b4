//! Page selection from the current path

use chrysalis_core::RoutesConfig;

/// Top-level page to mount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Admin dashboard
    Dashboard,
    /// Admin login form
    Login,
}

/// Pick the page for a path
///
/// Paths under the admin prefix show the dashboard, except the login path;
/// everything else shows the login page.
#[must_use]
pub fn resolve_page(path: &str, routes: &RoutesConfig) -> Page {
    if path.starts_with(&routes.admin_prefix) && !path.starts_with(&routes.login_path) {
        Page::Dashboard
    } else {
        Page::Login
    }
}
