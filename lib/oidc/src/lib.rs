//! OpenID Connect authentication orchestration for single-page applications.
//!
//! This crate sequences an external OIDC session client across the three
//! browser contexts a single-page application runs in:
//! - the top-level window, which starts and completes redirect sign-ins
//! - the hidden iframe the session client uses for silent token renewal
//! - the popup window used for popup sign-ins
//!
//! It provides:
//! - Flow context classification (`FlowContext`) from an environment snapshot
//! - Token retrieval with transparent silent renewal (`TokenRetriever`)
//! - The per-page-load authentication flow (`AuthenticationFlow`)
//! - The client facade used by host applications (`OidcClient`)
//!
//! The protocol itself (authorization requests, token exchange, ID token
//! validation, storage) stays behind the [`SessionClient`] trait.
//!
//! # Example
//!
//! ```
//! use spa_oidc::{EnvironmentSnapshot, FlowContext, SessionSettings};
//! use url::Url;
//!
//! let settings = SessionSettings::new(
//!     Url::parse("https://app.example/auth").unwrap(),
//!     Url::parse("https://app.example/").unwrap(),
//! );
//!
//! // The hidden renewal iframe loads the redirect page inside a frame.
//! let frame = EnvironmentSnapshot::framed("/auth");
//! assert_eq!(FlowContext::classify(&frame, &settings), FlowContext::SilentRenewFrame);
//!
//! // The same page in the top-level window completes a redirect sign-in.
//! let top = EnvironmentSnapshot::top_level("/auth");
//! assert_eq!(
//!     FlowContext::classify(&top, &settings),
//!     FlowContext::TopLevelRedirectCallback
//! );
//! ```

pub mod client;
pub mod config;
pub mod context;
pub mod environment;
pub mod error;
pub mod events;
pub mod facade;
pub mod flow;
pub mod headers;
pub mod retriever;
pub mod session;
pub mod settings;

#[cfg(test)]
mod testing;

// Re-export main types at crate root
pub use client::SessionClient;
pub use config::{OidcConfig, OidcConfigBuilder};
pub use context::FlowContext;
pub use environment::{Environment, EnvironmentSnapshot};
pub use error::{OidcError, SessionClientError};
pub use events::SessionEvent;
pub use facade::OidcClient;
pub use flow::{AuthenticationFlow, FlowOutcome};
pub use headers::{AUTHORIZATION, HeaderMapping, OutboundRequest, PendingHeaders};
pub use retriever::TokenRetriever;
pub use session::{RENEWAL_THRESHOLD_SECS, Session};
pub use settings::SessionSettings;
pub use spa_oidc_core::{AccessToken, Profile};
