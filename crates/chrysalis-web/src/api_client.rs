//! HTTP client for communicating with the Chrysalis admin API

use async_trait::async_trait;
use chrysalis_core::{DashboardData, Error, LoginResponse, Result};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use tracing::{debug, warn};

/// Login endpoint
pub const LOGIN_ENDPOINT: &str = "/api/admin/login";
/// Dashboard data endpoint
pub const DASHBOARD_ENDPOINT: &str = "/api/admin/dashboard";
/// Logout endpoint
pub const LOGOUT_ENDPOINT: &str = "/api/admin/logout";

/// Shown when the backend rejects a login
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
/// Shown when the request never produced a usable response
pub const NETWORK_ERROR: &str = "Network error";
/// Shown for any non-401 dashboard failure status
pub const DASHBOARD_FAILED: &str = "Failed to load dashboard.";
/// Shown when the dashboard payload reports a failure without detail
pub const DASHBOARD_UNAVAILABLE: &str = "Unable to load admin dashboard.";
/// Shown when the login payload reports a failure without detail
pub const LOGIN_FAILED: &str = "Login failed";

/// Result of one admin API call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiOutcome<T> {
    /// The call succeeded with a payload
    Success(T),
    /// The admin session is missing or expired
    AuthRequired,
    /// The call failed; the message is safe to show
    Failure(String),
}

impl<T> ApiOutcome<T> {
    /// Whether the call succeeded
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Transform the success payload
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiOutcome<U> {
        match self {
            Self::Success(value) => ApiOutcome::Success(f(value)),
            Self::AuthRequired => ApiOutcome::AuthRequired,
            Self::Failure(message) => ApiOutcome::Failure(message),
        }
    }
}

/// Operations the dashboard needs from the backend
///
/// Futures are not `Send`: in the browser they run on the single UI thread.
#[async_trait(?Send)]
pub trait AdminApi: Send + Sync {
    /// Authenticate the admin; the backend sets the session cookie
    async fn login(&self, username: &str, password: &str) -> ApiOutcome<()>;

    /// Load the dashboard, optionally for one doctor
    async fn fetch_dashboard(&self, doctor: Option<&str>) -> ApiOutcome<DashboardData>;

    /// End the admin session; `false` when the backend was unreachable
    async fn logout(&self) -> bool;
}

/// API client for making HTTP requests to the admin API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with default settings
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client that keeps session cookies and applies a request
    /// timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn with_timeout(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| Error::Configuration {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Create a client for the browser, where the fetch API owns cookies and
    /// timeouts
    ///
    /// # Errors
    ///
    /// Never fails in the browser; the signature matches the native build.
    #[cfg(target_arch = "wasm32")]
    pub fn with_timeout(base_url: impl Into<String>, _timeout_secs: u64) -> Result<Self> {
        Ok(Self::new(base_url))
    }

    /// Base URL requests are resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        with_credentials(request)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))
    }

    async fn try_login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let url = self.endpoint(LOGIN_ENDPOINT);
        debug!("POST {}", url);

        let request = self
            .client
            .post(&url)
            .form(&[("username", username), ("password", password)]);
        let response = self.send(request).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| Error::Decode(e.to_string()))
    }

    async fn try_fetch_dashboard(&self, doctor: Option<&str>) -> Result<DashboardData> {
        let url = self.endpoint(DASHBOARD_ENDPOINT);
        debug!("GET {} doctor={:?}", url, doctor);

        let mut request = self.client.get(&url);
        if let Some(doctor) = doctor.filter(|d| !d.is_empty()) {
            request = request.query(&[("doctor", doctor)]);
        }
        let response = self.send(request).await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(Error::Unauthorized);
        }
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| Error::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl AdminApi for ApiClient {
    async fn login(&self, username: &str, password: &str) -> ApiOutcome<()> {
        match self.try_login(username, password).await {
            Ok(body) if body.ok => ApiOutcome::Success(()),
            Ok(body) => ApiOutcome::Failure(body.error.unwrap_or_else(|| LOGIN_FAILED.to_string())),
            Err(Error::Status { status }) => {
                warn!("Login rejected with status {}", status);
                ApiOutcome::Failure(INVALID_CREDENTIALS.to_string())
            }
            Err(e) => {
                warn!("Login request failed: {}", e);
                ApiOutcome::Failure(NETWORK_ERROR.to_string())
            }
        }
    }

    async fn fetch_dashboard(&self, doctor: Option<&str>) -> ApiOutcome<DashboardData> {
        match self.try_fetch_dashboard(doctor).await {
            Ok(data) if data.ok => ApiOutcome::Success(data),
            Ok(data) => ApiOutcome::Failure(
                data.error
                    .unwrap_or_else(|| DASHBOARD_UNAVAILABLE.to_string()),
            ),
            Err(Error::Unauthorized) => ApiOutcome::AuthRequired,
            Err(Error::Status { status }) => {
                warn!("Dashboard request returned status {}", status);
                ApiOutcome::Failure(DASHBOARD_FAILED.to_string())
            }
            Err(e) => {
                warn!("Dashboard request failed: {}", e);
                ApiOutcome::Failure(NETWORK_ERROR.to_string())
            }
        }
    }

    async fn logout(&self) -> bool {
        let url = self.endpoint(LOGOUT_ENDPOINT);
        debug!("POST {}", url);

        match self.send(self.client.post(&url)).await {
            Ok(_) => true,
            Err(e) => {
                warn!("Logout request failed: {}", e);
                false
            }
        }
    }
}

/// Send the session cookie along with every request
#[cfg(target_arch = "wasm32")]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request.fetch_credentials_include()
}

/// Native clients carry cookies through the client's cookie store
#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_endpoint_joins_base_url() {
        let client = ApiClient::new("http://127.0.0.1:8080/");
        assert_eq!(
            client.endpoint(DASHBOARD_ENDPOINT),
            "http://127.0.0.1:8080/api/admin/dashboard"
        );

        let client = ApiClient::new("https://clinic.example");
        assert_eq!(
            client.endpoint(LOGIN_ENDPOINT),
            "https://clinic.example/api/admin/login"
        );
    }

    #[test]
    fn test_outcome_map() {
        let outcome: ApiOutcome<u32> = ApiOutcome::Success(2);
        assert_eq!(outcome.map(|n| n * 2), ApiOutcome::Success(4));

        let outcome: ApiOutcome<u32> = ApiOutcome::AuthRequired;
        assert_eq!(outcome.map(|n| n * 2), ApiOutcome::AuthRequired);

        let outcome: ApiOutcome<u32> = ApiOutcome::Failure("nope".to_string());
        assert!(!outcome.is_success());
    }
}
