//! The session client contract.
//!
//! A session client performs the actual OIDC protocol exchanges: building
//! the authorization redirect, parsing callbacks, driving the hidden iframe
//! for silent renewal, and storing the resulting session. The orchestrator
//! sequences these calls but never implements them.
//!
//! Session clients run on a single-threaded event loop, so the trait's
//! futures are not required to be `Send`.

use crate::error::SessionClientError;
use crate::session::Session;
use crate::settings::SessionSettings;
use async_trait::async_trait;

/// Trait for the external OIDC protocol implementation.
///
/// Redirect operations (`signin_redirect`, `signout_redirect`) start a
/// full-page navigation; their futures may never resolve in a real browser
/// because the page unloads first.
#[async_trait(?Send)]
pub trait SessionClient {
    /// The session client's lifecycle event source, passed through to hosts.
    type Events;

    /// Loads the stored session, if any.
    async fn get_user(&self) -> Result<Option<Session>, SessionClientError>;

    /// Navigates to the provider's authorization endpoint.
    async fn signin_redirect(&self) -> Result<(), SessionClientError>;

    /// Navigates to the provider's end-session endpoint.
    async fn signout_redirect(&self) -> Result<(), SessionClientError>;

    /// Renews the session through a hidden iframe.
    ///
    /// Returns `None` when the round trip completed without a session.
    async fn signin_silent(&self) -> Result<Option<Session>, SessionClientError>;

    /// Completes a sign-in from inside a nested frame (silent renewal or
    /// popup path), notifying the parent window.
    async fn signin_silent_callback(&self) -> Result<(), SessionClientError>;

    /// Completes a top-level redirect sign-in, exchanging the authorization
    /// response for a session.
    async fn signin_callback(&self) -> Result<(), SessionClientError>;

    /// Completes a top-level sign-out redirect.
    async fn signout_redirect_callback(&self) -> Result<(), SessionClientError>;

    /// Completes a sign-out inside a popup or frame.
    async fn signout_popup_callback(&self) -> Result<(), SessionClientError>;

    /// Returns the event source.
    fn events(&self) -> &Self::Events;

    /// Returns the redirect settings the client was configured with.
    fn settings(&self) -> &SessionSettings;
}
