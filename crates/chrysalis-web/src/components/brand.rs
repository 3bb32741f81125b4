//! Brand mark shown in the top bar and on the login page

use leptos::prelude::*;

/// Product wordmark
#[component]
pub fn Brand() -> impl IntoView {
    view! {
        <div class="admin-brand">"chry"<span>"sa"</span>"lis"</div>
    }
}
