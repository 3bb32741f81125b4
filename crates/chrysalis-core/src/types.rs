//! Data types exchanged with the Chrysalis backend
//!
//! Everything here is plain data decoded from the admin API. The client
//! never mutates these values; it only renders them.

use serde::{Deserialize, Serialize};

/// Doctor username, unique across the practice
pub type Username = String;

/// Exact status string the backend uses for doctors with patients
pub const ACTIVE_STATUS: &str = "Active";

/// Aggregate counters computed by the backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Number of registered doctors
    pub total_doctors: u64,
    /// Doctors with at least one patient
    pub active_doctors: u64,
    /// Number of patients across all doctors
    pub total_patients: u64,
}

/// A row of the doctor list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    /// Unique login name
    pub username: Username,
    /// Display name
    pub name: String,
    /// Free-form qualifications
    #[serde(default)]
    pub qualifications: String,
    /// Number of patients assigned
    #[serde(default)]
    pub patients: u64,
    /// `"Active"` or anything else (idle)
    #[serde(default)]
    pub status: String,
}

impl Doctor {
    /// Whether the backend reports the doctor as active
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == ACTIVE_STATUS
    }
}

/// The doctor the dashboard payload was computed for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorProfile {
    /// Unique login name
    pub username: Username,
    /// Display name
    pub name: String,
    /// Free-form qualifications
    #[serde(default)]
    pub qualifications: String,
}

/// One saved diagnosis for a patient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisSession {
    /// Creation timestamp, rendered verbatim
    #[serde(default)]
    pub created_at: String,
    /// Diagnosis text
    #[serde(default)]
    pub diagnosis: String,
    /// Treatment plan
    #[serde(default)]
    pub plan: String,
}

/// A patient assigned to the selected doctor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Unique identifier
    pub id: String,
    /// Full name
    pub name: String,
    /// Contact email
    #[serde(default)]
    pub email: String,
    /// Contact phone, any formatting
    #[serde(default)]
    pub phone: String,
    /// Age in years
    #[serde(default)]
    pub age: Option<u32>,
    /// Gender, empty when unknown
    #[serde(default)]
    pub gender: Option<String>,
    /// Postal address
    #[serde(default)]
    pub address: Option<String>,
    /// Doctor's notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Prescription delivery answer (`yes`/`no`/other)
    #[serde(default)]
    pub delivery_status: Option<String>,
    /// Message prefilled in the WhatsApp link
    #[serde(default)]
    pub delivery_message: Option<String>,
    /// Diagnoses in backend order
    #[serde(default)]
    pub history: Vec<DiagnosisSession>,
}

impl Patient {
    /// Delivery answer classified case-insensitively
    #[must_use]
    pub fn delivery(&self) -> DeliveryStatus {
        DeliveryStatus::classify(self.delivery_status.as_deref())
    }
}

/// Patient answer to the prescription delivery question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeliveryStatus {
    /// Answered "yes"
    Confirmed,
    /// Answered "no"
    Declined,
    /// No answer or anything else
    Pending,
}

impl DeliveryStatus {
    /// Classify a raw status string, ignoring case
    #[must_use]
    pub fn classify(raw: Option<&str>) -> Self {
        match raw {
            Some(status) if status.eq_ignore_ascii_case("yes") => Self::Confirmed,
            Some(status) if status.eq_ignore_ascii_case("no") => Self::Declined,
            _ => Self::Pending,
        }
    }
}

/// Payload of `GET /api/admin/dashboard`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    /// Backend success flag
    #[serde(default)]
    pub ok: bool,
    /// Backend failure detail when `ok` is false
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Aggregate counters
    #[serde(default)]
    pub summary: Option<DashboardSummary>,
    /// All registered doctors
    #[serde(default)]
    pub doctors: Vec<Doctor>,
    /// Doctor the patient list belongs to
    #[serde(default)]
    pub selected_doctor: Option<DoctorProfile>,
    /// Patients of the selected doctor
    #[serde(default)]
    pub patients: Vec<Patient>,
}

/// Body of a successful `POST /api/admin/login`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Backend success flag
    #[serde(default)]
    pub ok: bool,
    /// Failure detail when `ok` is false
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(Some("yes"), DeliveryStatus::Confirmed)]
    #[case(Some("YES"), DeliveryStatus::Confirmed)]
    #[case(Some("No"), DeliveryStatus::Declined)]
    #[case(Some("maybe"), DeliveryStatus::Pending)]
    #[case(Some(""), DeliveryStatus::Pending)]
    #[case(Some(" yes "), DeliveryStatus::Pending)]
    #[case(None, DeliveryStatus::Pending)]
    fn test_delivery_status_classification(
        #[case] raw: Option<&str>,
        #[case] expected: DeliveryStatus,
    ) {
        assert_eq!(DeliveryStatus::classify(raw), expected);
    }

    #[test]
    fn test_doctor_status_is_exact_match() {
        let mut doctor = Doctor {
            username: "drgrey".to_string(),
            name: "Meredith Grey".to_string(),
            qualifications: "MBBS".to_string(),
            patients: 2,
            status: "Active".to_string(),
        };
        assert!(doctor.is_active());

        doctor.status = "active".to_string();
        assert!(!doctor.is_active());

        doctor.status = "Idle".to_string();
        assert!(!doctor.is_active());
    }

    #[test]
    fn test_dashboard_payload_deserialization() {
        let payload = json!({
            "ok": true,
            "summary": { "totalDoctors": 2, "activeDoctors": 1, "totalPatients": 3 },
            "doctors": [
                { "username": "drgrey", "name": "Meredith Grey", "qualifications": "MBBS",
                  "patients": 3, "status": "Active" },
                { "username": "drshep", "name": "Derek Shepherd", "qualifications": "MD",
                  "patients": 0, "status": "Idle" }
            ],
            "selectedDoctor": { "username": "drgrey", "name": "Meredith Grey", "qualifications": "MBBS" },
            "patients": [{
                "id": "0f8e2d9c-1111-4c1b-a3c4-93a4f2c1d000",
                "name": "Ann Perkins",
                "email": "ann@example.com",
                "phone": "+1 (555) 010-2000",
                "age": null,
                "gender": "",
                "address": "",
                "notes": "",
                "deliveryStatus": "YES",
                "deliveryMessage": "Confirm delivery",
                "history": [
                    { "createdAt": "2024-03-01T10:00", "diagnosis": "Flu", "plan": "Rest" }
                ]
            }]
        });

        let data: DashboardData = serde_json::from_value(payload).unwrap();

        assert!(data.ok);
        assert_eq!(
            data.summary,
            Some(DashboardSummary {
                total_doctors: 2,
                active_doctors: 1,
                total_patients: 3,
            })
        );
        assert_eq!(data.doctors.len(), 2);
        assert_eq!(data.selected_doctor.unwrap().username, "drgrey");

        let patient = &data.patients[0];
        assert_eq!(patient.age, None);
        assert_eq!(patient.delivery(), DeliveryStatus::Confirmed);
        assert_eq!(patient.history[0].diagnosis, "Flu");
    }

    #[test]
    fn test_dashboard_without_selection() {
        let data: DashboardData = serde_json::from_value(json!({
            "ok": true,
            "summary": { "totalDoctors": 0, "activeDoctors": 0, "totalPatients": 0 },
            "doctors": [],
            "selectedDoctor": null
        }))
        .unwrap();

        assert!(data.selected_doctor.is_none());
        assert!(data.patients.is_empty());
    }

    #[test]
    fn test_missing_ok_flag_defaults_to_failure() {
        let data: DashboardData = serde_json::from_value(json!({ "doctors": [] })).unwrap();
        assert!(!data.ok);
    }

    #[test]
    fn test_login_response() {
        let ok: LoginResponse = serde_json::from_str(r#"{"ok":true}"#).unwrap();
        assert!(ok.ok);
        assert!(ok.error.is_none());

        let rejected: LoginResponse =
            serde_json::from_str(r#"{"ok":false,"error":"invalid_credentials"}"#).unwrap();
        assert!(!rejected.ok);
        assert_eq!(rejected.error.as_deref(), Some("invalid_credentials"));
    }
}
