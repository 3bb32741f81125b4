//! Error types for the Chrysalis admin dashboard

use thiserror::Error;

/// Main error type for the admin dashboard
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message
        message: String,
    },

    /// Logging could not be initialized
    #[error("Logging initialization failed: {0}")]
    Logging(String),

    /// The request never produced a response
    #[error("Transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-success status
    #[error("Unexpected HTTP status: {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// The backend rejected the admin session
    #[error("Admin session is not authorized")]
    Unauthorized,

    /// Response body could not be decoded
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration {
            message: err.to_string(),
        }
    }
}
