//! Access to the current location
//!
//! Routing and selection read the URL through [`Navigator`] so controllers
//! run the same way against the browser and against an in-memory location.

use chrysalis_core::{Error, Result};
use parking_lot::Mutex;
use reqwest::Url;
use std::sync::Arc;
use tracing::info;

/// Read and change the current location
pub trait Navigator: Send + Sync {
    /// Path component of the current URL
    fn path(&self) -> String;

    /// Value of a query parameter, `None` when absent or empty
    fn query_param(&self, key: &str) -> Option<String>;

    /// Set (`Some`) or remove (`None`) a query parameter in place, replacing
    /// the current history entry without reloading
    fn set_query_param(&self, key: &str, value: Option<&str>);

    /// Navigate to another location with a full page load
    fn assign(&self, location: &str);
}

/// Shared handle to the active navigator
pub type SharedNavigator = Arc<dyn Navigator>;

/// Rewrite the query of `url`, keeping the order of the other parameters
fn rewrite_query(url: &mut Url, key: &str, value: Option<&str>) {
    let mut replaced = false;
    let mut pairs = Vec::new();
    for (k, v) in url.query_pairs().into_owned() {
        if k != key {
            pairs.push((k, v));
        } else if let (Some(value), false) = (value, replaced) {
            // Duplicate keys collapse onto the first occurrence
            pairs.push((k, value.to_string()));
            replaced = true;
        }
    }
    if let (Some(value), false) = (value, replaced) {
        pairs.push((key.to_string(), value.to_string()));
    }

    if pairs.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(pairs);
    }
}

#[derive(Debug)]
struct MemoryLocation {
    url: Url,
    assigned: Vec<String>,
}

/// In-memory location used off the browser
///
/// Full navigations are recorded instead of performed.
#[derive(Debug, Clone)]
pub struct MemoryNavigator {
    inner: Arc<Mutex<MemoryLocation>>,
}

impl MemoryNavigator {
    const ORIGIN: &'static str = "http://localhost";

    /// Start at a path with optional query, e.g. `/admin?doctor=drgrey`
    ///
    /// # Errors
    ///
    /// Returns an error if the location cannot be resolved to a URL.
    pub fn new(location: &str) -> Result<Self> {
        let url = Url::parse(Self::ORIGIN)
            .and_then(|origin| origin.join(location))
            .map_err(|e| Error::Other(format!("Invalid location {location:?}: {e}")))?;

        Ok(Self {
            inner: Arc::new(Mutex::new(MemoryLocation {
                url,
                assigned: Vec::new(),
            })),
        })
    }

    /// Query string without the leading `?`, `None` when there is none
    pub fn query(&self) -> Option<String> {
        self.inner.lock().url.query().map(ToString::to_string)
    }

    /// Path plus query, as the address bar would show it
    pub fn location(&self) -> String {
        let inner = self.inner.lock();
        match inner.url.query() {
            Some(query) => format!("{}?{query}", inner.url.path()),
            None => inner.url.path().to_string(),
        }
    }

    /// Every full navigation requested so far, oldest first
    pub fn assigned(&self) -> Vec<String> {
        self.inner.lock().assigned.clone()
    }

    /// Most recent full navigation
    pub fn last_assigned(&self) -> Option<String> {
        self.inner.lock().assigned.last().cloned()
    }
}

impl Navigator for MemoryNavigator {
    fn path(&self) -> String {
        self.inner.lock().url.path().to_string()
    }

    fn query_param(&self, key: &str) -> Option<String> {
        self.inner
            .lock()
            .url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
            .filter(|v| !v.is_empty())
    }

    fn set_query_param(&self, key: &str, value: Option<&str>) {
        let mut inner = self.inner.lock();
        rewrite_query(&mut inner.url, key, value);
    }

    fn assign(&self, location: &str) {
        info!("Navigating to {}", location);
        self.inner.lock().assigned.push(location.to_string());
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserNavigator;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{Navigator, rewrite_query};
    use reqwest::Url;
    use tracing::{info, warn};
    use wasm_bindgen::JsValue;

    /// Navigator backed by `window.location` and `window.history`
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserNavigator;

    impl BrowserNavigator {
        /// Origin of the page, e.g. `https://clinic.example`
        pub fn origin(self) -> Option<String> {
            web_sys::window().and_then(|w| w.location().origin().ok())
        }

        fn href() -> Option<Url> {
            let href = web_sys::window()?.location().href().ok()?;
            Url::parse(&href).ok()
        }
    }

    impl Navigator for BrowserNavigator {
        fn path(&self) -> String {
            web_sys::window()
                .and_then(|w| w.location().pathname().ok())
                .unwrap_or_else(|| "/".to_string())
        }

        fn query_param(&self, key: &str) -> Option<String> {
            Self::href()?
                .query_pairs()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.into_owned())
                .filter(|v| !v.is_empty())
        }

        fn set_query_param(&self, key: &str, value: Option<&str>) {
            let Some(mut url) = Self::href() else {
                warn!("Cannot read current location");
                return;
            };
            rewrite_query(&mut url, key, value);

            let replaced = web_sys::window()
                .and_then(|w| w.history().ok())
                .map(|history| {
                    history.replace_state_with_url(&JsValue::NULL, "", Some(url.as_str()))
                });
            if !matches!(replaced, Some(Ok(()))) {
                warn!("Failed to replace history entry with {}", url);
            }
        }

        fn assign(&self, location: &str) {
            info!("Navigating to {}", location);
            let assigned = web_sys::window().map(|w| w.location().assign(location));
            if !matches!(assigned, Some(Ok(()))) {
                warn!("Failed to navigate to {}", location);
            }
        }
    }
}
