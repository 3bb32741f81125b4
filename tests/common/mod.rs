//! Common test utilities and fixtures for integration tests

#![allow(dead_code, unreachable_pub)]

use chrysalis_core::Config;
use chrysalis_web::{ApiClient, AppState, MemoryNavigator};
use wiremock::MockServer;

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;

/// Mock backend plus the client-side collaborators wired to it
pub struct TestContext {
    pub server: MockServer,
    pub navigator: MemoryNavigator,
    pub state: AppState,
}

impl TestContext {
    /// Start a mock backend and open `location` in memory
    pub async fn new(location: &str) -> Self {
        Self::with_config(location, Config::default()).await
    }

    /// Same as [`TestContext::new`] with custom configuration; the API base
    /// URL is always the mock server
    pub async fn with_config(location: &str, mut config: Config) -> Self {
        init_test_logging();

        let server = MockServer::start().await;
        config.api.base_url = server.uri();
        config.api.request_timeout = 5;

        let api = ApiClient::with_timeout(config.api.base_url.clone(), config.api.request_timeout)
            .expect("Failed to build API client");
        let navigator = MemoryNavigator::new(location).expect("Invalid test location");
        let state = AppState::new(config, api, navigator.clone());

        Self {
            server,
            navigator,
            state,
        }
    }

    /// A client talking to the mock server
    pub fn client(&self) -> ApiClient {
        ApiClient::with_timeout(self.server.uri(), 5).expect("Failed to build API client")
    }
}
