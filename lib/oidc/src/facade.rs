//! The client facade consumed by host applications.

use crate::client::SessionClient;
use crate::config::OidcConfig;
use crate::context::FlowContext;
use crate::environment::Environment;
use crate::error::OidcError;
use crate::flow::{AuthenticationFlow, FlowOutcome};
use crate::headers::{OutboundRequest, authorization_headers};
use crate::retriever::TokenRetriever;
use crate::settings::SessionSettings;
use spa_oidc_core::{AccessToken, Profile, Result};
use std::rc::Rc;
use tracing::{debug, instrument};

/// OIDC client for a single-page application.
///
/// Construct one per page with [`OidcClient::setup`]. It wraps one session
/// client for the lifetime of the page; there is no teardown. Constructing a
/// second client against the same redirect URIs in the same page is not
/// supported, since both would observe the same URL and framing.
pub struct OidcClient<S, E> {
    client: Rc<S>,
    environment: Rc<E>,
    retriever: TokenRetriever<S>,
    flow: AuthenticationFlow<S, E>,
    restrict: bool,
}

impl<S, E> OidcClient<S, E>
where
    S: SessionClient + 'static,
    E: Environment,
{
    /// Creates the client.
    ///
    /// When the page is the post-logout redirect target, the matching
    /// signout callback runs first: the redirect variant for a top-level
    /// window, the popup variant inside a frame. Its outcome is not
    /// surfaced.
    #[instrument(skip_all, fields(client_id = config.client_id()))]
    pub async fn setup(config: &OidcConfig, client: S, environment: E) -> Self {
        let env = environment.snapshot();
        if FlowContext::classify(&env, client.settings()) == FlowContext::PostLogoutRedirect {
            let outcome = if env.is_top_level {
                client.signout_redirect_callback().await
            } else {
                client.signout_popup_callback().await
            };
            if let Err(err) = outcome {
                debug!(error = %err, top_level = env.is_top_level, "signout callback did not complete");
            }
        }

        let client = Rc::new(client);
        let environment = Rc::new(environment);
        Self {
            retriever: TokenRetriever::new(Rc::clone(&client)),
            flow: AuthenticationFlow::new(
                Rc::clone(&client),
                Rc::clone(&environment),
                config.app_uri().map(str::to_string),
            ),
            client,
            environment,
            restrict: config.restrict(),
        }
    }

    /// Starts the sign-in redirect to the identity provider.
    pub async fn login(&self) -> Result<(), OidcError> {
        self.client.signin_redirect().await.map_err(OidcError::from)?;
        Ok(())
    }

    /// Starts the sign-out redirect to the identity provider.
    pub async fn logout(&self) -> Result<(), OidcError> {
        self.client.signout_redirect().await.map_err(OidcError::from)?;
        Ok(())
    }

    /// Handles the current page load. Call once, before rendering.
    ///
    /// Returns [`FlowOutcome::Render`] when the application should render
    /// now. [`FlowOutcome::NavigationPending`] means a redirect or frame
    /// message is in flight and nothing should render. An error is not
    /// recoverable by retrying; present it and offer [`logout`](Self::logout).
    #[instrument(skip_all)]
    pub async fn handle_authentication(&self) -> Result<FlowOutcome, OidcError> {
        self.flow.run().await
    }

    /// Returns a valid access token, renewing silently when close to expiry.
    pub async fn token(&self) -> Result<AccessToken, OidcError> {
        self.retriever.retrieve_token().await
    }

    /// Returns the signed-in user's profile claims.
    pub async fn account(&self) -> Result<Profile, OidcError> {
        self.retriever.retrieve_profile().await
    }

    /// Attaches a deferred `Authorization: Bearer` header to `request`.
    ///
    /// Does nothing when the configuration sets `restrict`. Token retrieval
    /// failures leave the request without the header.
    pub fn extend_headers<R: OutboundRequest + ?Sized>(&self, request: &mut R) {
        if self.restrict {
            return;
        }
        request.set_headers(Box::pin(authorization_headers(self.retriever.clone())));
    }

    /// Returns the session client's event source.
    #[must_use]
    pub fn events(&self) -> &S::Events {
        self.client.events()
    }

    /// Returns the session client's redirect settings.
    #[must_use]
    pub fn settings(&self) -> &SessionSettings {
        self.client.settings()
    }

    /// Returns the wrapped session client.
    #[must_use]
    pub fn session_client(&self) -> &S {
        &self.client
    }

    /// Returns the page environment.
    #[must_use]
    pub fn environment(&self) -> &E {
        &self.environment
    }
}
