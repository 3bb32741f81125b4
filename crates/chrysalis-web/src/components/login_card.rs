//! Login form

use crate::controllers::LoginController;
use crate::state::AppState;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// User ID and password form posting to the login endpoint
#[component]
pub fn LoginCard() -> impl IntoView {
    let state = expect_context::<AppState>();
    let controller = LoginController::new(&state);
    let form = RwSignal::new(controller.snapshot());

    let on_username = {
        let controller = controller.clone();
        move |ev: ev::Event| {
            controller.set_username(event_target_value(&ev));
            form.set(controller.snapshot());
        }
    };
    let on_password = {
        let controller = controller.clone();
        move |ev: ev::Event| {
            controller.set_password(event_target_value(&ev));
            form.set(controller.snapshot());
        }
    };
    let on_submit = move |_: ev::MouseEvent| {
        let controller = controller.clone();
        let credentials = controller.begin_submit();
        form.set(controller.snapshot());
        spawn_local(async move {
            controller.complete_submit(credentials).await;
            form.set(controller.snapshot());
        });
    };

    view! {
        <section class="login-card">
            {move || {
                form.with(|f| f.error.clone())
                    .map(|error| view! { <p class="error-text">{error}</p> })
            }}
            <label class="field">
                <span>"User ID"</span>
                <input
                    type="text"
                    placeholder="Enter user ID"
                    prop:value=move || form.with(|f| f.username.clone())
                    on:input=on_username
                />
            </label>
            <label class="field">
                <span>"Password"</span>
                <input
                    type="password"
                    placeholder="Enter password"
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=on_password
                />
            </label>
            <button
                type="button"
                class="primary-btn"
                disabled=move || form.with(|f| f.loading)
                on:click=on_submit
            >
                {move || form.with(|f| f.submit_label())}
            </button>
        </section>
    }
}
