//! Error types for the orchestrator.
//!
//! Errors are designed for layered context using rootcause:
//! - `SessionClientError`: failures reported by the external session client
//! - `OidcError`: orchestrator outcomes surfaced to the facade's caller

use std::fmt;

/// Errors reported by a [`SessionClient`](crate::SessionClient) implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionClientError {
    /// The identity provider could not be reached.
    Network { details: String },
    /// The provider response could not be processed (bad callback URL,
    /// state mismatch, rejected token request, clock skew).
    Protocol { details: String },
    /// A hidden-frame or popup round trip did not complete in time.
    Timeout,
    /// The session client is not available in this environment.
    Unavailable { details: String },
}

impl fmt::Display for SessionClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network { details } => write!(f, "identity provider unreachable: {details}"),
            Self::Protocol { details } => write!(f, "OIDC protocol error: {details}"),
            Self::Timeout => write!(f, "frame round trip timed out"),
            Self::Unavailable { details } => {
                write!(f, "session client unavailable: {details}")
            }
        }
    }
}

impl std::error::Error for SessionClientError {}

/// Errors surfaced by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OidcError {
    /// There is no session. Expected on first visit; the authentication
    /// flow converts it into a sign-in redirect.
    NotLoggedIn,
    /// Silent renewal completed without producing an access token.
    SilentRenewFailed,
    /// Token retrieval reported success with an empty token.
    InvalidToken,
    /// The session client failed. Carried unchanged.
    SessionClient(SessionClientError),
    /// A configured URI could not be parsed.
    InvalidUri { uri: String, reason: String },
}

impl fmt::Display for OidcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotLoggedIn => {
                write!(f, "not logged in, call `login()` to retrieve a token")
            }
            Self::SilentRenewFailed => {
                write!(f, "silent renew failed to retrieve access token")
            }
            Self::InvalidToken => write!(f, "invalid token during authentication"),
            Self::SessionClient(err) => write!(f, "{err}"),
            Self::InvalidUri { uri, reason } => write!(f, "invalid URI '{uri}': {reason}"),
        }
    }
}

impl std::error::Error for OidcError {}

impl From<SessionClientError> for OidcError {
    fn from(err: SessionClientError) -> Self {
        Self::SessionClient(err)
    }
}
