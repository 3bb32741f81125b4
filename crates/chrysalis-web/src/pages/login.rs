//! Admin login page

use crate::components::{Brand, LoginCard};
use leptos::prelude::*;

/// Login page component
#[component]
pub fn AdminLogin() -> impl IntoView {
    view! {
        <main class="auth-shell">
            <div class="auth-center">
                <Brand />
                <LoginCard />
            </div>
        </main>
    }
}
