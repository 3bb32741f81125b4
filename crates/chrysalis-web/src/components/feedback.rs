//! Feedback line for loading and error states

use leptos::prelude::*;

/// Shown while the dashboard is loading
pub const LOADING_MESSAGE: &str = "Loading admin dashboard...";

/// Single-line status message in place of the dashboard body
#[component]
pub fn Feedback(
    /// Text to show
    message: String,
) -> impl IntoView {
    view! {
        <div class="admin-feedback">{message}</div>
    }
}
