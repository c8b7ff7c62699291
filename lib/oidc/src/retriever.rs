//! Token and profile retrieval with transparent silent renewal.

use crate::client::SessionClient;
use crate::error::OidcError;
use crate::session::RENEWAL_THRESHOLD_SECS;
use spa_oidc_core::{AccessToken, Profile, Result};
use std::rc::Rc;
use tracing::debug;

/// Reads tokens and profiles from the session client.
///
/// Concurrent callers are not coalesced: each call that finds a token
/// within [`RENEWAL_THRESHOLD_SECS`] of expiry starts its own renewal.
pub struct TokenRetriever<S> {
    client: Rc<S>,
}

impl<S> Clone for TokenRetriever<S> {
    fn clone(&self) -> Self {
        Self {
            client: Rc::clone(&self.client),
        }
    }
}

impl<S: SessionClient> TokenRetriever<S> {
    /// Creates a retriever over a shared session client.
    #[must_use]
    pub fn new(client: Rc<S>) -> Self {
        Self { client }
    }

    /// Returns a currently valid access token.
    ///
    /// A cached token with more than [`RENEWAL_THRESHOLD_SECS`] of lifetime
    /// left is returned without a network call. Otherwise one silent renewal
    /// is attempted; its failure is returned unchanged.
    pub async fn retrieve_token(&self) -> Result<AccessToken, OidcError> {
        let Some(session) = self.client.get_user().await.map_err(OidcError::from)? else {
            return Err(OidcError::NotLoggedIn.into());
        };

        if let Some(token) = session.usable_token() {
            return Ok(token.clone());
        }

        debug!(
            expires_in = ?session.expires_in(),
            threshold = RENEWAL_THRESHOLD_SECS,
            "access token near expiry, renewing silently"
        );

        let renewed = self
            .client
            .signin_silent()
            .await
            .map_err(OidcError::from)?;

        match renewed.and_then(|session| session.access_token().cloned()) {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(OidcError::SilentRenewFailed.into()),
        }
    }

    /// Returns the signed-in user's profile.
    ///
    /// Never renews; an expired session reads as not logged in.
    pub async fn retrieve_profile(&self) -> Result<Profile, OidcError> {
        match self.client.get_user().await.map_err(OidcError::from)? {
            Some(session) if !session.is_expired() => Ok(session.into_profile()),
            _ => Err(OidcError::NotLoggedIn.into()),
        }
    }
}
