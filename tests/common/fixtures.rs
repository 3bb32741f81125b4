//! JSON bodies shaped like the backend's admin API responses

use serde_json::{Value, json};

/// Doctor row as listed by the dashboard
pub fn doctor_json(username: &str, name: &str, patients: u64) -> Value {
    json!({
        "username": username,
        "name": name,
        "qualifications": "MBBS, MD",
        "patients": patients,
        "status": if patients > 0 { "Active" } else { "Idle" },
    })
}

/// Patient with contact details and one diagnosis
pub fn patient_json(id: &str, name: &str, delivery_status: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
        "phone": "+1 (555) 010-2030",
        "age": 34,
        "gender": "Female",
        "address": "12 Harbour Road",
        "notes": "",
        "deliveryStatus": delivery_status,
        "deliveryMessage": "Reply YES to confirm delivery",
        "history": [
            {
                "createdAt": "2026-03-02 10:15",
                "diagnosis": "Seasonal allergies",
                "plan": "Cetirizine 10mg daily",
            }
        ],
    })
}

/// Dashboard payload with two doctors; `selected` adds the profile and its
/// patients
pub fn dashboard_json(selected: Option<&str>) -> Value {
    let doctors = vec![
        doctor_json("drgrey", "Meredith Grey", 2),
        doctor_json("drshep", "Derek Shepherd", 0),
    ];

    let mut body = json!({
        "ok": true,
        "summary": {
            "totalDoctors": 2,
            "activeDoctors": 1,
            "totalPatients": 2,
        },
        "doctors": doctors,
    });

    if let Some(username) = selected {
        body["selectedDoctor"] = json!({
            "username": username,
            "name": "Meredith Grey",
            "qualifications": "MBBS, MD",
        });
        body["patients"] = if username == "drgrey" {
            json!([
                patient_json("p-1", "Izzie", "yes"),
                patient_json("p-2", "George", "pending"),
            ])
        } else {
            json!([])
        };
    }

    body
}

/// Dashboard payload reporting a backend failure
pub fn dashboard_failure_json(error: Option<&str>) -> Value {
    match error {
        Some(error) => json!({ "ok": false, "error": error }),
        None => json!({ "ok": false }),
    }
}

/// Login response body
pub fn login_json(ok: bool, error: Option<&str>) -> Value {
    match error {
        Some(error) => json!({ "ok": ok, "error": error }),
        None => json!({ "ok": ok }),
    }
}
