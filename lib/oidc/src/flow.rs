//! The per-page-load authentication flow.
//!
//! [`AuthenticationFlow::run`] classifies the page load and runs one handler
//! per [`FlowContext`]. Every handler ends in one of three ways: render the
//! application now, do not render because a navigation or frame message is
//! in flight, or fail.

use crate::client::SessionClient;
use crate::context::FlowContext;
use crate::environment::Environment;
use crate::error::{OidcError, SessionClientError};
use crate::retriever::TokenRetriever;
use spa_oidc_core::{AccessToken, Result};
use std::rc::Rc;
use tracing::debug;

/// What the host application should do after authentication was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    /// Render the application now.
    Render,
    /// A redirect, navigation, or frame message is in flight; do not render.
    NavigationPending,
}

impl FlowOutcome {
    /// Returns true if the host should render now.
    #[must_use]
    pub fn render_now(self) -> bool {
        matches!(self, Self::Render)
    }
}

/// Routes a page load to the matching session client callback.
pub struct AuthenticationFlow<S, E> {
    client: Rc<S>,
    environment: Rc<E>,
    retriever: TokenRetriever<S>,
    app_uri: Option<String>,
}

impl<S: SessionClient, E: Environment> AuthenticationFlow<S, E> {
    /// Creates a flow over the shared session client and environment.
    ///
    /// `app_uri`, when set, is navigated to after a completed sign-in callback.
    #[must_use]
    pub fn new(client: Rc<S>, environment: Rc<E>, app_uri: Option<String>) -> Self {
        Self {
            retriever: TokenRetriever::new(Rc::clone(&client)),
            client,
            environment,
            app_uri,
        }
    }

    /// Handles the current page load.
    ///
    /// The post-logout rule is not applied here; the facade runs the signout
    /// callback at construction, so a post-logout page continues as a normal
    /// application page.
    pub async fn run(&self) -> Result<FlowOutcome, OidcError> {
        let env = self.environment.snapshot();
        let context = FlowContext::classify_callback(&env, self.client.settings());
        debug!(%context, path = %env.path, top_level = env.is_top_level, "handling authentication");

        match context {
            // A nested frame has no opener; the parent is notified through
            // the silent callback for both frame paths.
            FlowContext::SilentRenewFrame | FlowContext::PopupCallback => {
                Self::complete_frame(self.client.signin_silent_callback().await)
            }
            FlowContext::TopLevelRedirectCallback => self.complete_redirect().await,
            // `classify_callback` never yields `PostLogoutRedirect`; it is
            // listed only to keep the match exhaustive.
            FlowContext::PostLogoutRedirect | FlowContext::Normal => self.resume_session().await,
        }
    }

    /// A frame never renders the application. A failure here means the
    /// parent window was not notified; the parent sees its renewal stall.
    fn complete_frame(
        outcome: std::result::Result<(), SessionClientError>,
    ) -> Result<FlowOutcome, OidcError> {
        outcome.map_err(OidcError::from)?;
        Ok(FlowOutcome::NavigationPending)
    }

    /// Failing the sign-in callback is not recoverable here. It usually
    /// means a misconfigured provider or clock skew; the host is expected to
    /// report it and offer `logout()`.
    async fn complete_redirect(&self) -> Result<FlowOutcome, OidcError> {
        self.client.signin_callback().await.map_err(OidcError::from)?;

        match &self.app_uri {
            Some(app_uri) => {
                debug!(%app_uri, "redirecting to configured application URI");
                self.environment.navigate(app_uri);
                Ok(FlowOutcome::NavigationPending)
            }
            None => Ok(FlowOutcome::Render),
        }
    }

    /// Regular page: render with a valid token, or start the sign-in
    /// redirect when there is no session yet.
    async fn resume_session(&self) -> Result<FlowOutcome, OidcError> {
        match self.retriever.retrieve_token().await {
            Ok(token) => Self::render_with(&token),
            Err(report) if *report.current_context() == OidcError::NotLoggedIn => {
                debug!("no session, starting sign-in redirect");
                self.client.signin_redirect().await.map_err(OidcError::from)?;
                Ok(FlowOutcome::NavigationPending)
            }
            Err(report) => Err(report),
        }
    }

    /// A retrieved token must be non-empty before the application renders.
    ///
    /// `TokenRetriever` already rejects empty tokens, so this only fails for
    /// a session client that reports an empty token as valid.
    fn render_with(token: &AccessToken) -> Result<FlowOutcome, OidcError> {
        if token.is_empty() {
            return Err(OidcError::InvalidToken.into());
        }
        Ok(FlowOutcome::Render)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::EnvironmentSnapshot;
    use crate::settings::SessionSettings;
    use crate::testing::{
        Call, FakeEnvironment, FakeSessionClient, default_settings, network_error, session,
    };
    use url::Url;

    struct Harness {
        flow: AuthenticationFlow<FakeSessionClient, FakeEnvironment>,
        client: Rc<FakeSessionClient>,
        environment: Rc<FakeEnvironment>,
    }

    fn harness(
        client: FakeSessionClient,
        env: EnvironmentSnapshot,
        app_uri: Option<&str>,
    ) -> Harness {
        let client = Rc::new(client);
        let environment = Rc::new(FakeEnvironment::new(env));
        Harness {
            flow: AuthenticationFlow::new(
                Rc::clone(&client),
                Rc::clone(&environment),
                app_uri.map(str::to_string),
            ),
            client,
            environment,
        }
    }

    #[test]
    fn render_now_only_for_render() {
        assert!(FlowOutcome::Render.render_now());
        assert!(!FlowOutcome::NavigationPending.render_now());
    }

    #[test]
    fn empty_token_is_invalid() {
        type Flow = AuthenticationFlow<FakeSessionClient, FakeEnvironment>;

        let err = Flow::render_with(&AccessToken::from("")).expect_err("should fail");

        assert_eq!(err.current_context(), &OidcError::InvalidToken);
        assert_eq!(
            Flow::render_with(&AccessToken::from("tok")).expect("outcome"),
            FlowOutcome::Render
        );
    }

    #[tokio::test]
    async fn silent_renew_frame_notifies_parent_and_does_not_render() {
        let h = harness(
            FakeSessionClient::new(),
            EnvironmentSnapshot::framed("/auth"),
            Some("https://app.example/home"),
        );

        let outcome = h.flow.run().await.expect("outcome");

        assert_eq!(outcome, FlowOutcome::NavigationPending);
        assert_eq!(h.client.calls(), vec![Call::SigninSilentCallback]);
        assert!(h.environment.navigations().is_empty());
    }

    #[tokio::test]
    async fn popup_frame_notifies_parent_through_silent_callback() {
        let settings = default_settings()
            .with_popup_redirect_uri(Url::parse("https://app.example/popup").expect("url"));
        let h = harness(
            FakeSessionClient::new().with_settings(settings),
            EnvironmentSnapshot::framed("/popup"),
            None,
        );

        let outcome = h.flow.run().await.expect("outcome");

        assert_eq!(outcome, FlowOutcome::NavigationPending);
        assert_eq!(h.client.calls(), vec![Call::SigninSilentCallback]);
        assert!(h.environment.navigations().is_empty());
    }

    #[tokio::test]
    async fn frame_callback_failure_is_returned() {
        let h = harness(
            FakeSessionClient::new().with_callback_error(SessionClientError::Timeout),
            EnvironmentSnapshot::framed("/auth"),
            None,
        );

        let err = h.flow.run().await.expect_err("should fail");

        assert_eq!(
            err.current_context(),
            &OidcError::SessionClient(SessionClientError::Timeout)
        );
    }

    #[tokio::test]
    async fn redirect_callback_without_app_uri_renders() {
        let h = harness(
            FakeSessionClient::new(),
            EnvironmentSnapshot::top_level("/auth"),
            None,
        );

        let outcome = h.flow.run().await.expect("outcome");

        assert_eq!(outcome, FlowOutcome::Render);
        assert_eq!(h.client.calls(), vec![Call::SigninCallback]);
        assert!(h.environment.navigations().is_empty());
    }

    #[tokio::test]
    async fn redirect_callback_with_app_uri_navigates_once() {
        let h = harness(
            FakeSessionClient::new(),
            EnvironmentSnapshot::top_level("/auth"),
            Some("https://app.example/home"),
        );

        let outcome = h.flow.run().await.expect("outcome");

        assert_eq!(outcome, FlowOutcome::NavigationPending);
        assert_eq!(h.environment.navigations(), vec!["https://app.example/home"]);
    }

    #[tokio::test]
    async fn redirect_callback_failure_does_not_navigate() {
        let protocol = SessionClientError::Protocol {
            details: "No matching state found in storage".to_string(),
        };
        let h = harness(
            FakeSessionClient::new().with_callback_error(protocol.clone()),
            EnvironmentSnapshot::top_level("/auth"),
            Some("https://app.example/home"),
        );

        let err = h.flow.run().await.expect_err("should fail");

        assert_eq!(err.current_context(), &OidcError::SessionClient(protocol));
        assert!(h.environment.navigations().is_empty());
    }

    #[tokio::test]
    async fn normal_page_with_session_renders() {
        let h = harness(
            FakeSessionClient::new().with_user(session(Some("tok"), 3600)),
            EnvironmentSnapshot::top_level("/dashboard"),
            None,
        );

        let outcome = h.flow.run().await.expect("outcome");

        assert_eq!(outcome, FlowOutcome::Render);
        assert_eq!(h.client.count(Call::SigninRedirect), 0);
    }

    #[tokio::test]
    async fn normal_page_without_session_starts_exactly_one_sign_in() {
        let h = harness(
            FakeSessionClient::new(),
            EnvironmentSnapshot::top_level("/"),
            None,
        );

        let outcome = h.flow.run().await.expect("outcome");

        assert_eq!(outcome, FlowOutcome::NavigationPending);
        assert_eq!(h.client.count(Call::SigninRedirect), 1);
    }

    #[tokio::test]
    async fn normal_page_renews_stale_session_before_rendering() {
        let h = harness(
            FakeSessionClient::new()
                .with_user(session(Some("stale"), 20))
                .with_renewal(Ok(Some(session(Some("fresh"), 3600)))),
            EnvironmentSnapshot::top_level("/dashboard"),
            None,
        );

        let outcome = h.flow.run().await.expect("outcome");

        assert_eq!(outcome, FlowOutcome::Render);
        assert_eq!(h.client.count(Call::SigninSilent), 1);
    }

    #[tokio::test]
    async fn normal_page_renewal_failure_is_returned() {
        let h = harness(
            FakeSessionClient::new()
                .with_user(session(Some("stale"), 20))
                .with_renewal(Ok(None)),
            EnvironmentSnapshot::top_level("/dashboard"),
            None,
        );

        let err = h.flow.run().await.expect_err("should fail");

        assert_eq!(err.current_context(), &OidcError::SilentRenewFailed);
        assert_eq!(h.client.count(Call::SigninRedirect), 0);
    }

    #[tokio::test]
    async fn normal_page_provider_failure_is_returned() {
        let h = harness(
            FakeSessionClient::new().with_get_user_error(network_error()),
            EnvironmentSnapshot::top_level("/dashboard"),
            None,
        );

        let err = h.flow.run().await.expect_err("should fail");

        assert_eq!(err.current_context(), &OidcError::SessionClient(network_error()));
        assert_eq!(h.client.count(Call::SigninRedirect), 0);
    }

    #[tokio::test]
    async fn framed_normal_page_is_not_a_callback() {
        let settings = SessionSettings::new(
            Url::parse("https://app.example/auth").expect("url"),
            Url::parse("https://app.example/signed-out").expect("url"),
        );
        let h = harness(
            FakeSessionClient::new()
                .with_settings(settings)
                .with_user(session(Some("tok"), 3600)),
            EnvironmentSnapshot::framed("/embedded"),
            None,
        );

        let outcome = h.flow.run().await.expect("outcome");

        assert_eq!(outcome, FlowOutcome::Render);
        assert_eq!(h.client.calls(), vec![Call::GetUser]);
    }
}
