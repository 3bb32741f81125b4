//! Dashboard top bar

use crate::components::brand::Brand;
use leptos::prelude::*;

/// Brand mark and logout button
#[component]
pub fn AdminTopBar(
    /// Invoked when Logout is clicked
    on_logout: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="admin-topbar">
            <Brand />
            <button class="admin-ghost" type="button" on:click=move |_| on_logout.run(())>
                "Logout"
            </button>
        </header>
    }
}
