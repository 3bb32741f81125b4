//! Login form controller

use crate::api_client::{AdminApi, ApiOutcome, LOGIN_FAILED};
use crate::navigation::SharedNavigator;
use crate::state::AppState;
use chrysalis_core::RoutesConfig;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

/// Contents and status of the login form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    /// Entered user ID
    pub username: String,
    /// Entered password
    pub password: String,
    /// Message of the last failed attempt
    pub error: Option<String>,
    /// A submission is in flight
    pub loading: bool,
}

impl LoginForm {
    /// Label of the submit button
    pub const fn submit_label(&self) -> &'static str {
        if self.loading { "Logging in..." } else { "Login" }
    }
}

/// Credentials captured when a submission starts
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// What finishing a submission did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginEffect {
    /// Logged in; navigated to the dashboard
    Redirected,
    /// The error message was stored
    Failed,
}

/// Controller behind the login form
#[derive(Clone)]
pub struct LoginController {
    api: Arc<dyn AdminApi>,
    navigator: SharedNavigator,
    routes: RoutesConfig,
    form: Arc<Mutex<LoginForm>>,
}

impl LoginController {
    /// Create a controller with an empty form
    pub fn new(app: &AppState) -> Self {
        Self {
            api: Arc::clone(&app.api),
            navigator: Arc::clone(&app.navigator),
            routes: app.config.routes.clone(),
            form: Arc::new(Mutex::new(LoginForm::default())),
        }
    }

    /// Copy of the current form
    pub fn snapshot(&self) -> LoginForm {
        self.form.lock().clone()
    }

    /// Update the user ID field
    pub fn set_username(&self, username: impl Into<String>) {
        self.form.lock().username = username.into();
    }

    /// Update the password field
    pub fn set_password(&self, password: impl Into<String>) {
        self.form.lock().password = password.into();
    }

    /// Clear the previous error, enter the loading state and capture the
    /// credentials to send
    pub fn begin_submit(&self) -> Credentials {
        let mut form = self.form.lock();
        form.error = None;
        form.loading = true;

        Credentials {
            username: form.username.clone(),
            password: form.password.clone(),
        }
    }

    /// Send captured credentials and apply the result
    pub async fn complete_submit(&self, credentials: Credentials) -> LoginEffect {
        let outcome = self
            .api
            .login(&credentials.username, &credentials.password)
            .await;

        match outcome {
            ApiOutcome::Success(()) => {
                info!("Admin {} logged in", credentials.username);
                self.form.lock().loading = false;
                self.navigator.assign(&self.routes.admin_prefix);
                LoginEffect::Redirected
            }
            ApiOutcome::Failure(message) => {
                warn!("Login for {} failed: {}", credentials.username, message);
                self.fail(message);
                LoginEffect::Failed
            }
            ApiOutcome::AuthRequired => {
                self.fail(LOGIN_FAILED.to_string());
                LoginEffect::Failed
            }
        }
    }

    /// Submit the form as it currently stands
    pub async fn submit(&self) -> LoginEffect {
        let credentials = self.begin_submit();
        self.complete_submit(credentials).await
    }

    fn fail(&self, message: String) {
        let mut form = self.form.lock();
        form.loading = false;
        form.error = Some(if message.is_empty() {
            LOGIN_FAILED.to_string()
        } else {
            message
        });
    }
}

impl fmt::Debug for LoginController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let form = self.form.lock();
        f.debug_struct("LoginController")
            .field("username", &form.username)
            .field("loading", &form.loading)
            .field("error", &form.error)
            .finish_non_exhaustive()
    }
}
