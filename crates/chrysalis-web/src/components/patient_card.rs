//! Patient detail card

use chrysalis_core::utils::{format_age_gender, non_empty, whatsapp_link};
use chrysalis_core::{DeliveryStatus, DiagnosisSession, Patient};
use leptos::prelude::*;

/// Title class for a delivery answer
#[must_use]
pub const fn title_class(status: DeliveryStatus) -> &'static str {
    match status {
        DeliveryStatus::Confirmed => "patient-title is-yes",
        DeliveryStatus::Declined => "patient-title is-no",
        DeliveryStatus::Pending => "patient-title",
    }
}

/// Contact, delivery link and diagnosis history of one patient
#[component]
pub fn PatientCard(
    /// Patient to show
    patient: Patient,
) -> impl IntoView {
    let class = title_class(patient.delivery());
    let whatsapp = whatsapp_link(&patient.phone, patient.delivery_message.as_deref());
    let age_gender = format_age_gender(patient.age, patient.gender.as_deref());
    let address = non_empty(patient.address.as_deref()).map(ToString::to_string);
    let notes = non_empty(patient.notes.as_deref()).map(ToString::to_string);

    let history = if patient.history.is_empty() {
        view! { <p class="admin-muted">"No diagnosis saved yet."</p> }.into_any()
    } else {
        patient
            .history
            .into_iter()
            .map(|session| view! { <HistoryEntry session /> })
            .collect_view()
            .into_any()
    };

    view! {
        <article class="patient-card">
            <h5 class=class>{patient.name}</h5>
            <p class="patient-meta">{patient.email}" | "{patient.phone}</p>
            {age_gender.map(|text| view! { <p class="patient-meta">"Age: "{text}</p> })}
            {address
                .map(|text| {
                    view! {
                        <p class="patient-info">
                            <strong>"Address:"</strong>" "{text}
                        </p>
                    }
                })}
            {notes
                .map(|text| {
                    view! {
                        <p class="patient-info">
                            <strong>"Notes:"</strong>" "{text}
                        </p>
                    }
                })}
            {whatsapp
                .map(|href| {
                    view! {
                        <div class="patient-actions">
                            <a
                                class="admin-action"
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                "Send WhatsApp message"
                            </a>
                        </div>
                    }
                })}
            {history}
        </article>
    }
}

#[component]
fn HistoryEntry(session: DiagnosisSession) -> impl IntoView {
    view! {
        <div class="patient-history">
            <p class="patient-history-date">{session.created_at}</p>
            <p class="patient-history-label">"Diagnosis"</p>
            <p class="patient-history-text">{session.diagnosis}</p>
            <p class="patient-history-label">"Plan"</p>
            <p class="patient-history-text">{session.plan}</p>
        </div>
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Some("yes"), "patient-title is-yes")]
    #[case(Some("YES"), "patient-title is-yes")]
    #[case(Some("No"), "patient-title is-no")]
    #[case(Some("maybe"), "patient-title")]
    #[case(None, "patient-title")]
    fn test_title_class(#[case] raw: Option<&str>, #[case] expected: &str) {
        assert_eq!(title_class(DeliveryStatus::classify(raw)), expected);
    }
}
