//! Session lifecycle events raised by the session client.
//!
//! The orchestrator passes the session client's event source through to the
//! host application without interpreting it. Adapters translate their native
//! notifications into [`SessionEvent`] so hosts can match on one type.

use serde::{Deserialize, Serialize};

/// A notification about the session's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionEvent {
    /// A session was loaded or renewed.
    UserLoaded,
    /// The session was removed.
    UserUnloaded,
    /// The access token is about to expire.
    AccessTokenExpiring,
    /// The access token has expired.
    AccessTokenExpired,
    /// A background silent renewal failed.
    SilentRenewError,
    /// The provider reports the user signed out elsewhere.
    UserSignedOut,
}

impl SessionEvent {
    /// Returns the event name as a string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserLoaded => "user_loaded",
            Self::UserUnloaded => "user_unloaded",
            Self::AccessTokenExpiring => "access_token_expiring",
            Self::AccessTokenExpired => "access_token_expired",
            Self::SilentRenewError => "silent_renew_error",
            Self::UserSignedOut => "user_signed_out",
        }
    }
}

impl std::fmt::Display for SessionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
