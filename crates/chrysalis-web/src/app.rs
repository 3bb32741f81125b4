//! Root Leptos component choosing the page from the current path

use crate::pages::{AdminDashboard, AdminLogin};
use crate::routes::{Page, resolve_page};
use crate::state::AppState;
use leptos::prelude::*;
use tracing::debug;

/// Main application component
///
/// Provides `state` as context and mounts the page for the current path.
/// Moving between pages is a full navigation, so the choice is made once.
#[component]
pub fn App(
    /// Shared configuration and collaborators
    state: AppState,
) -> impl IntoView {
    let path = state.navigator.path();
    let page = resolve_page(&path, &state.config.routes);
    debug!("Path {} resolves to {:?}", path, page);
    provide_context(state);

    match page {
        Page::Dashboard => view! { <AdminDashboard /> }.into_any(),
        Page::Login => view! { <AdminLogin /> }.into_any(),
    }
}
