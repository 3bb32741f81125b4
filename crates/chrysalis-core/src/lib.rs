//! Core types and utilities for the Chrysalis admin dashboard

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod config;
pub mod error;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::{Config, LoggingConfig, RoutesConfig};
pub use error::{Error, Result};
pub use types::{
    DashboardData, DashboardSummary, DeliveryStatus, DiagnosisSession, Doctor, DoctorProfile,
    LoginResponse, Patient, Username,
};

/// Initialize the logging system
///
/// `RUST_LOG` takes precedence over the configured level.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a global subscriber is
/// already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| Error::Logging(e.to_string()))?;

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
    // stdout and the system clock are unavailable in the browser
    #[cfg(target_arch = "wasm32")]
    let fmt_layer = fmt_layer
        .with_ansi(false)
        .without_time()
        .with_writer(tracing_web::MakeWebConsoleWriter::new());

    let registry = tracing_subscriber::registry().with(filter);
    let result = if config.is_json() {
        registry.with(fmt_layer.json()).try_init()
    } else {
        registry.with(fmt_layer).try_init()
    };

    result.map_err(|e| Error::Logging(e.to_string()))
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_init_logging_writes_to_console() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            format: "json".to_string(),
        };

        assert!(init_logging(&config).is_ok());
        tracing::info!(target: "chrysalis_core", "console logging ready");
    }
}
