//! Admin dashboard page: counters, doctor list and the selected doctor's
//! patients

use crate::components::{
    AdminTopBar, DoctorTable, Feedback, LOADING_MESSAGE, PatientsPanel, StatsGrid,
};
use crate::controllers::{DashboardController, DashboardState, DashboardView};
use crate::state::AppState;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Dashboard page component
#[component]
pub fn AdminDashboard() -> impl IntoView {
    let state = expect_context::<AppState>();
    let controller = DashboardController::mount(&state);
    let snapshot = RwSignal::new(controller.snapshot());
    let selection = RwSignal::new(controller.selected_doctor());

    // Reload on mount and after every selection change
    {
        let controller = controller.clone();
        Effect::new(move |_| {
            selection.track();
            let request = controller.begin_load();
            snapshot.set(controller.snapshot());

            let controller = controller.clone();
            spawn_local(async move {
                if controller.complete_load(request).await.changed_state() {
                    snapshot.set(controller.snapshot());
                }
            });
        });
    }

    let on_select = {
        let controller = controller.clone();
        Callback::new(move |username: String| {
            selection.set(controller.select_doctor(&username));
        })
    };

    let on_logout = {
        let controller = controller.clone();
        Callback::new(move |()| {
            let controller = controller.clone();
            spawn_local(async move { controller.logout().await });
        })
    };

    on_cleanup(move || controller.unmount());

    view! {
        <div class="admin-dashboard">
            <AdminTopBar on_logout />
            {move || match snapshot.with(DashboardState::view) {
                DashboardView::Loading => {
                    view! { <Feedback message={LOADING_MESSAGE.to_string()} /> }.into_any()
                }
                DashboardView::Failed(error) => view! { <Feedback message=error /> }.into_any(),
                DashboardView::Ready(content) => {
                    view! {
                        <StatsGrid summary={content.summary} />
                        <DoctorTable
                            doctors={content.doctors}
                            selected={content.selected_username}
                            on_select
                        />
                        <PatientsPanel doctor={content.doctor} patients={content.patients} />
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
