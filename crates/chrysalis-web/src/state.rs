//! Application state management

use crate::api_client::AdminApi;
use crate::navigation::{Navigator, SharedNavigator};
use chrysalis_core::Config;
use std::fmt;
use std::sync::Arc;

/// Application state holding configuration and collaborators
///
/// Provided as Leptos context by the root component.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<Config>,
    /// API client for backend communication
    pub api: Arc<dyn AdminApi>,
    /// Access to the current location
    pub navigator: SharedNavigator,
}

impl AppState {
    /// Create new application state
    pub fn new(
        config: Config,
        api: impl AdminApi + 'static,
        navigator: impl Navigator + 'static,
    ) -> Self {
        Self {
            config: Arc::new(config),
            api: Arc::new(api),
            navigator: Arc::new(navigator),
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("path", &self.navigator.path())
            .finish_non_exhaustive()
    }
}
