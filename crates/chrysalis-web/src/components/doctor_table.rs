//! Doctor list table

use chrysalis_core::Doctor;
use leptos::prelude::*;

/// Row class: highlighted when the row's doctor is the selected one
#[must_use]
pub fn row_class(username: &str, selected: Option<&str>) -> &'static str {
    if selected == Some(username) {
        "is-selected"
    } else {
        ""
    }
}

/// Status pill class: only exactly "Active" counts as active
#[must_use]
pub fn status_class(doctor: &Doctor) -> &'static str {
    if doctor.is_active() {
        "status-pill status-active"
    } else {
        "status-pill status-idle"
    }
}

/// Table of every registered doctor
#[component]
pub fn DoctorTable(
    /// Doctors to list
    doctors: Vec<Doctor>,
    /// Username of the highlighted row
    selected: Option<String>,
    /// Invoked with the username of a clicked doctor
    on_select: Callback<String>,
) -> impl IntoView {
    let rows = if doctors.is_empty() {
        view! {
            <tr>
                <td colspan="5" class="admin-muted">"No doctors registered yet."</td>
            </tr>
        }
        .into_any()
    } else {
        doctors
            .into_iter()
            .map(|doctor| {
                let class = row_class(&doctor.username, selected.as_deref());
                let pill = status_class(&doctor);
                let username = doctor.username.clone();
                view! {
                    <tr class=class>
                        <td>
                            <button
                                type="button"
                                class="admin-link"
                                on:click=move |_| on_select.run(username.clone())
                            >
                                {doctor.name}
                            </button>
                        </td>
                        <td>{doctor.username}</td>
                        <td>{doctor.qualifications}</td>
                        <td>{doctor.patients}</td>
                        <td>
                            <span class=pill>{doctor.status}</span>
                        </td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <section class="admin-section">
            <div class="admin-section-header">
                <div>
                    <h3 class="admin-section-title">"Doctor List"</h3>
                    <p class="admin-muted">"All registered doctors"</p>
                </div>
            </div>
            <div class="admin-table-card">
                <table class="admin-table">
                    <thead>
                        <tr>
                            <th>"Doctor Name"</th>
                            <th>"User ID"</th>
                            <th>"Qualifications"</th>
                            <th>"Patients"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
        </section>
    }
}
