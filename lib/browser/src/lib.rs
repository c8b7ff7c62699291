//! Browser bindings for spa-oidc.
//!
//! This crate connects the orchestrator to a real page:
//! - `BrowserSessionClient`: the `oidc-client` `UserManager` as a `SessionClient`
//! - `BrowserEnvironment`: `window.location` and `window.top`
//! - `FetchRequest`: a `fetch` request that accepts deferred headers
//! - `init_logging`: `tracing` output to the browser console
//!
//! The `oidc-client` script bundle must be loaded before the wasm module
//! starts, so that the `Oidc` global exists.

pub mod bindings;
pub mod environment;
pub mod error;
pub mod events;
pub mod logging;
pub mod request;
pub mod session_client;
pub mod setup;

pub use environment::BrowserEnvironment;
pub use error::FetchError;
pub use events::BrowserEvents;
pub use logging::{default_level, init_logging};
pub use request::FetchRequest;
pub use session_client::BrowserSessionClient;
pub use setup::{BrowserOidcClient, setup_oidc_client};
