//! Configuration management for the admin dashboard

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Backend API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Client-side URL surface
    #[serde(default)]
    pub routes: RoutesConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend; empty means the page origin
    #[serde(default)]
    pub base_url: String,

    /// Request timeout in seconds (native clients only)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

/// Paths and query keys the dashboard routes on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutesConfig {
    /// Prefix of every dashboard path
    #[serde(default = "default_admin_prefix")]
    pub admin_prefix: String,

    /// Path of the login page
    #[serde(default = "default_login_path")]
    pub login_path: String,

    /// Query parameter holding the selected doctor
    #[serde(default = "default_selection_param")]
    pub selection_param: String,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or text)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
const fn default_request_timeout() -> u64 {
    30
}

fn default_admin_prefix() -> String {
    "/admin".to_string()
}

fn default_login_path() -> String {
    "/admin/login".to_string()
}

fn default_selection_param() -> String {
    "doctor".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            request_timeout: default_request_timeout(),
        }
    }
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            admin_prefix: default_admin_prefix(),
            login_path: default_login_path(),
            selection_param: default_selection_param(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Whether structured JSON output was requested
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from an optional `config` file and `CHRYSALIS_*`
    /// environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or parsed.
    pub fn load() -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("CHRYSALIS")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
