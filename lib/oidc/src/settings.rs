//! The redirect URIs the session client was configured with.
//!
//! The classifier compares the current page path against the paths of these
//! URIs. Silent and popup redirects default to the sign-in redirect URI, so
//! one callback page serves all three flows.

use crate::config::OidcConfig;
use crate::error::OidcError;
use spa_oidc_core::Result;
use url::Url;

/// Path appended to the page origin when no redirect URI is configured.
pub const DEFAULT_REDIRECT_PATH: &str = "/auth";

/// Snapshot of the session client's redirect settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    redirect_uri: Url,
    silent_redirect_uri: Url,
    popup_redirect_uri: Url,
    post_logout_redirect_uri: Url,
}

impl SessionSettings {
    /// Creates settings where the silent and popup redirects share `redirect_uri`.
    #[must_use]
    pub fn new(redirect_uri: Url, post_logout_redirect_uri: Url) -> Self {
        Self {
            silent_redirect_uri: redirect_uri.clone(),
            popup_redirect_uri: redirect_uri.clone(),
            redirect_uri,
            post_logout_redirect_uri,
        }
    }

    /// Derives settings from the configuration, resolving defaults against
    /// the page `origin`.
    pub fn from_config(config: &OidcConfig, origin: &Url) -> Result<Self, OidcError> {
        let redirect_uri = match config.redirect_uri() {
            Some(uri) => parse_uri(uri)?,
            None => origin
                .join(DEFAULT_REDIRECT_PATH)
                .map_err(|e| OidcError::InvalidUri {
                    uri: origin.to_string(),
                    reason: e.to_string(),
                })?,
        };
        let post_logout_redirect_uri = match config.post_logout_redirect_uri() {
            Some(uri) => parse_uri(uri)?,
            None => origin.clone(),
        };

        Ok(Self::new(redirect_uri, post_logout_redirect_uri))
    }

    /// Overrides the silent renewal redirect URI.
    #[must_use]
    pub fn with_silent_redirect_uri(mut self, uri: Url) -> Self {
        self.silent_redirect_uri = uri;
        self
    }

    /// Overrides the popup redirect URI.
    #[must_use]
    pub fn with_popup_redirect_uri(mut self, uri: Url) -> Self {
        self.popup_redirect_uri = uri;
        self
    }

    #[must_use]
    pub fn redirect_uri(&self) -> &Url {
        &self.redirect_uri
    }

    #[must_use]
    pub fn silent_redirect_uri(&self) -> &Url {
        &self.silent_redirect_uri
    }

    #[must_use]
    pub fn popup_redirect_uri(&self) -> &Url {
        &self.popup_redirect_uri
    }

    #[must_use]
    pub fn post_logout_redirect_uri(&self) -> &Url {
        &self.post_logout_redirect_uri
    }
}

fn parse_uri(uri: &str) -> Result<Url, OidcError> {
    Ok(Url::parse(uri).map_err(|e| OidcError::InvalidUri {
        uri: uri.to_string(),
        reason: e.to_string(),
    })?)
}
