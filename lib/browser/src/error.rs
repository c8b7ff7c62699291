//! Error types for the browser crate.

use std::fmt;

/// Errors from sending a [`FetchRequest`](crate::FetchRequest).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request could not be constructed (bad URL, bad header).
    InvalidRequest { details: String },
    /// `fetch` rejected, usually a network or CORS failure.
    Network { details: String },
    /// No global window to fetch from.
    NoWindow,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRequest { details } => write!(f, "invalid request: {details}"),
            Self::Network { details } => write!(f, "fetch failed: {details}"),
            Self::NoWindow => write!(f, "no global window"),
        }
    }
}

impl std::error::Error for FetchError {}
