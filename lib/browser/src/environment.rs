//! [`Environment`] over the browser `window`.

use crate::session_client::describe;
use spa_oidc::{Environment, EnvironmentSnapshot, OidcError, SessionClientError};
use spa_oidc_core::Result;
use tracing::warn;
use url::Url;
use web_sys::Window;

/// The current browser window.
pub struct BrowserEnvironment {
    window: Window,
}

impl BrowserEnvironment {
    /// Captures the global `window`.
    pub fn new() -> Result<Self, OidcError> {
        let window = web_sys::window().ok_or_else(|| {
            OidcError::from(SessionClientError::Unavailable {
                details: "no global window".to_string(),
            })
        })?;
        Ok(Self { window })
    }

    /// Returns the page origin, e.g. `https://app.example/`.
    pub fn origin(&self) -> Result<Url, OidcError> {
        let origin = self.window.location().origin().map_err(|e| {
            OidcError::from(SessionClientError::Unavailable {
                details: describe(&e),
            })
        })?;
        Ok(Url::parse(&origin).map_err(|e| OidcError::InvalidUri {
            uri: origin.clone(),
            reason: e.to_string(),
        })?)
    }

    /// True when `window === window.top`.
    fn is_top_level(&self) -> bool {
        match self.window.top() {
            Ok(Some(top)) => js_sys::Object::is(&top, &self.window),
            Ok(None) => true,
            Err(_) => false,
        }
    }
}

impl Environment for BrowserEnvironment {
    fn snapshot(&self) -> EnvironmentSnapshot {
        let path = self.window.location().pathname().unwrap_or_default();
        EnvironmentSnapshot {
            path,
            is_top_level: self.is_top_level(),
        }
    }

    fn navigate(&self, uri: &str) {
        if let Err(e) = self.window.location().set_href(uri) {
            warn!(%uri, error = %describe(&e), "navigation failed");
        }
    }
}
