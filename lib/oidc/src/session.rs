//! Session snapshots read from the session client.
//!
//! The session client owns and mutates the session. The orchestrator only
//! reads three fields from a snapshot: the access token, the seconds until
//! expiry, and the profile.

use serde::{Deserialize, Serialize};
use spa_oidc_core::{AccessToken, Profile};

/// Minimum remaining lifetime, in seconds, for a cached token to be used
/// without renewal. Covers one renewal round trip so an in-flight request
/// does not race token expiry.
pub const RENEWAL_THRESHOLD_SECS: i64 = 60;

/// A snapshot of the signed-in user's session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// The current access token, if the provider issued one.
    access_token: Option<AccessToken>,
    /// Seconds until the access token expires. Zero or negative means
    /// expired; `None` when the provider did not report a lifetime.
    expires_in: Option<i64>,
    /// Claims about the authenticated subject.
    #[serde(default)]
    profile: Profile,
}

impl Session {
    /// Creates a session snapshot.
    #[must_use]
    pub fn new(
        access_token: Option<AccessToken>,
        expires_in: Option<i64>,
        profile: Profile,
    ) -> Self {
        Self {
            access_token,
            expires_in,
            profile,
        }
    }

    /// Returns the access token, if present.
    #[must_use]
    pub fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    /// Returns the seconds until expiry, if known.
    #[must_use]
    pub fn expires_in(&self) -> Option<i64> {
        self.expires_in
    }

    /// Returns the profile claims.
    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Consumes the snapshot, returning the profile.
    #[must_use]
    pub fn into_profile(self) -> Profile {
        self.profile
    }

    /// Returns the token if it can be used without renewal.
    ///
    /// A token with an unknown lifetime always needs renewal.
    #[must_use]
    pub fn usable_token(&self) -> Option<&AccessToken> {
        let fresh = self
            .expires_in
            .is_some_and(|secs| secs > RENEWAL_THRESHOLD_SECS);
        self.access_token
            .as_ref()
            .filter(|token| fresh && !token.is_empty())
    }

    /// Returns true if the session is known to have expired.
    ///
    /// An unknown lifetime does not count as expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_in.is_some_and(|secs| secs <= 0)
    }
}
