//! Browser entry point for the Chrysalis admin dashboard
#![forbid(unsafe_code)]

#[cfg(target_arch = "wasm32")]
fn main() {
    use chrysalis_core::{Config, init_logging};
    use chrysalis_web::{ApiClient, App, AppState, BrowserNavigator};
    use leptos::prelude::*;
    use tracing::{error, info, warn};

    console_error_panic_hook::set_once();

    let config = Config::load().unwrap_or_else(|e| {
        leptos::logging::warn!("Failed to load config: {e}, using defaults");
        Config::default()
    });

    if let Err(e) = init_logging(&config.logging) {
        leptos::logging::warn!("Logging disabled: {e}");
    }

    // Relative endpoints do not resolve in the browser client
    let base_url = if config.api.base_url.is_empty() {
        BrowserNavigator.origin().unwrap_or_else(|| {
            warn!("Page origin unavailable, requests use relative URLs");
            String::new()
        })
    } else {
        config.api.base_url.clone()
    };

    let api = match ApiClient::with_timeout(base_url, config.api.request_timeout) {
        Ok(api) => api,
        Err(e) => {
            error!("Failed to create API client: {}", e);
            return;
        }
    };

    info!("Mounting admin dashboard against {}", api.base_url());
    let state = AppState::new(config, api, BrowserNavigator);
    leptos::mount::mount_to_body(move || view! { <App state /> });
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = chrysalis_core::Config::load().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        chrysalis_core::Config::default()
    });
    chrysalis_core::init_logging(&config.logging)?;

    tracing::error!("chrysalis-admin runs in the browser; build it for wasm32-unknown-unknown");
    Err("unsupported target".into())
}
