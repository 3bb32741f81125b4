//! Test helper functions and utilities

use super::fixtures::{dashboard_json, login_json};
use chrysalis_web::ApiClient;
use std::sync::Once;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

static INIT_LOGGER: Once = Once::new();

/// Address nothing listens on
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1";

/// Initialize test logging (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// Client whose every request fails at the transport level
pub fn unreachable_client() -> ApiClient {
    ApiClient::with_timeout(UNREACHABLE_URL, 2).expect("Failed to build API client")
}

/// Accept any login
pub async fn mount_login_ok(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/admin/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_json(true, None)))
        .mount(server)
        .await;
}

/// Reject every login with `status`
pub async fn mount_login_status(server: &MockServer, status: u16) {
    Mock::given(method("POST"))
        .and(path("/api/admin/login"))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Serve the unselected dashboard
pub async fn mount_dashboard(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/admin/dashboard"))
        .and(query_param_is_missing("doctor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(dashboard_json(None)))
        .mount(server)
        .await;
}

/// Serve the dashboard for one selected doctor
pub async fn mount_dashboard_for(server: &MockServer, doctor: &str) {
    Mock::given(method("GET"))
        .and(path("/api/admin/dashboard"))
        .and(query_param("doctor", doctor))
        .respond_with(ResponseTemplate::new(200).set_body_json(dashboard_json(Some(doctor))))
        .mount(server)
        .await;
}

/// Answer every dashboard request with `status`
pub async fn mount_dashboard_status(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path("/api/admin/dashboard"))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Accept logout
pub async fn mount_logout(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/admin/logout"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(server)
        .await;
}
