//! Chrysalis Admin Dashboard
//!
//! Browser front end for clinic administrators: log in, review doctor and
//! patient counters, browse doctors and inspect the patients assigned to one.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod api_client;
pub mod app;
pub mod components;
pub mod controllers;
pub mod navigation;
pub mod pages;
pub mod routes;
pub mod state;

pub use api_client::{AdminApi, ApiClient, ApiOutcome};
pub use app::App;
#[cfg(target_arch = "wasm32")]
pub use navigation::BrowserNavigator;
pub use navigation::{MemoryNavigator, Navigator, SharedNavigator};
pub use routes::{Page, resolve_page};
pub use state::AppState;
