//! Patients of the selected doctor

use crate::components::patient_card::PatientCard;
use chrysalis_core::{DoctorProfile, Patient};
use leptos::prelude::*;

/// Shown when no doctor is selected
pub const SELECT_PROMPT: &str = "Select a doctor to view their patients.";
/// Shown when the selected doctor has no patients
pub const NO_PATIENTS: &str = "No patients assigned to this doctor.";

/// Panel header line
#[must_use]
pub fn panel_subtitle(doctor: Option<&DoctorProfile>) -> String {
    doctor.map_or_else(
        || SELECT_PROMPT.to_string(),
        |doctor| format!("Dr. {} | {}", doctor.name, doctor.qualifications),
    )
}

/// What goes under the panel header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelBody {
    /// No doctor selected; the header carries the prompt
    Prompt,
    /// The selected doctor has no patients
    Empty,
    /// One card per patient
    Patients(Vec<Patient>),
}

impl PanelBody {
    /// Decide the body for a selection
    #[must_use]
    pub fn new(doctor: Option<&DoctorProfile>, patients: Vec<Patient>) -> Self {
        match doctor {
            None => Self::Prompt,
            Some(_) if patients.is_empty() => Self::Empty,
            Some(_) => Self::Patients(patients),
        }
    }
}

/// Patients panel
#[component]
pub fn PatientsPanel(
    /// Selected doctor, `None` for the prompt
    doctor: Option<DoctorProfile>,
    /// Patients of the selected doctor
    patients: Vec<Patient>,
) -> impl IntoView {
    let subtitle = panel_subtitle(doctor.as_ref());
    let body = match PanelBody::new(doctor.as_ref(), patients) {
        PanelBody::Prompt => ().into_any(),
        PanelBody::Empty => view! { <p class="admin-muted">{NO_PATIENTS}</p> }.into_any(),
        PanelBody::Patients(patients) => patients
            .into_iter()
            .map(|patient| view! { <PatientCard patient /> })
            .collect_view()
            .into_any(),
    };

    view! {
        <section class="admin-section">
            <div class="admin-panel">
                <div class="admin-section-header">
                    <div>
                        <h3 class="admin-section-title">"Patients"</h3>
                        <p class="admin-muted">{subtitle}</p>
                    </div>
                </div>
                {body}
            </div>
        </section>
    }
}
