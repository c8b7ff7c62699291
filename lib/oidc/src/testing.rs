//! In-memory fakes shared by the unit tests.

use crate::client::SessionClient;
use crate::environment::{Environment, EnvironmentSnapshot};
use crate::error::SessionClientError;
use crate::session::Session;
use crate::settings::SessionSettings;
use async_trait::async_trait;
use serde_json::json;
use spa_oidc_core::{AccessToken, Profile};
use std::cell::RefCell;
use url::Url;

/// A recorded session client call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    GetUser,
    SigninRedirect,
    SignoutRedirect,
    SigninSilent,
    SigninSilentCallback,
    SigninCallback,
    SignoutRedirectCallback,
    SignoutPopupCallback,
}

type Outcome<T> = Result<T, SessionClientError>;

pub struct FakeSessionClient {
    user: RefCell<Outcome<Option<Session>>>,
    renewal: RefCell<Outcome<Option<Session>>>,
    callback: RefCell<Outcome<()>>,
    calls: RefCell<Vec<Call>>,
    events: String,
    settings: SessionSettings,
}

impl FakeSessionClient {
    /// A client with no stored session whose operations all succeed.
    pub fn new() -> Self {
        Self {
            user: RefCell::new(Ok(None)),
            renewal: RefCell::new(Ok(None)),
            callback: RefCell::new(Ok(())),
            calls: RefCell::new(Vec::new()),
            events: "fake-events".to_string(),
            settings: default_settings(),
        }
    }

    pub fn with_user(self, session: Session) -> Self {
        *self.user.borrow_mut() = Ok(Some(session));
        self
    }

    pub fn with_get_user_error(self, err: SessionClientError) -> Self {
        *self.user.borrow_mut() = Err(err);
        self
    }

    pub fn with_renewal(self, outcome: Outcome<Option<Session>>) -> Self {
        *self.renewal.borrow_mut() = outcome;
        self
    }

    pub fn with_callback_error(self, err: SessionClientError) -> Self {
        *self.callback.borrow_mut() = Err(err);
        self
    }

    pub fn with_settings(mut self, settings: SessionSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, call: Call) -> usize {
        self.calls.borrow().iter().filter(|c| **c == call).count()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn callback(&self, call: Call) -> Outcome<()> {
        self.record(call);
        self.callback.borrow().clone()
    }
}

#[async_trait(?Send)]
impl SessionClient for FakeSessionClient {
    type Events = String;

    async fn get_user(&self) -> Outcome<Option<Session>> {
        self.record(Call::GetUser);
        self.user.borrow().clone()
    }

    async fn signin_redirect(&self) -> Outcome<()> {
        self.record(Call::SigninRedirect);
        Ok(())
    }

    async fn signout_redirect(&self) -> Outcome<()> {
        self.record(Call::SignoutRedirect);
        Ok(())
    }

    async fn signin_silent(&self) -> Outcome<Option<Session>> {
        self.record(Call::SigninSilent);
        self.renewal.borrow().clone()
    }

    async fn signin_silent_callback(&self) -> Outcome<()> {
        self.callback(Call::SigninSilentCallback)
    }

    async fn signin_callback(&self) -> Outcome<()> {
        self.callback(Call::SigninCallback)
    }

    async fn signout_redirect_callback(&self) -> Outcome<()> {
        self.callback(Call::SignoutRedirectCallback)
    }

    async fn signout_popup_callback(&self) -> Outcome<()> {
        self.callback(Call::SignoutPopupCallback)
    }

    fn events(&self) -> &String {
        &self.events
    }

    fn settings(&self) -> &SessionSettings {
        &self.settings
    }
}

pub struct FakeEnvironment {
    snapshot: EnvironmentSnapshot,
    navigations: RefCell<Vec<String>>,
}

impl FakeEnvironment {
    pub fn new(snapshot: EnvironmentSnapshot) -> Self {
        Self {
            snapshot,
            navigations: RefCell::new(Vec::new()),
        }
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }
}

impl Environment for FakeEnvironment {
    fn snapshot(&self) -> EnvironmentSnapshot {
        self.snapshot.clone()
    }

    fn navigate(&self, uri: &str) {
        self.navigations.borrow_mut().push(uri.to_string());
    }
}

/// Redirect at "/auth", post-logout redirect at "/".
pub fn default_settings() -> SessionSettings {
    SessionSettings::new(
        Url::parse("https://app.example/auth").expect("redirect uri"),
        Url::parse("https://app.example/").expect("post logout uri"),
    )
}

pub fn session(token: Option<&str>, expires_in: i64) -> Session {
    session_with_expiry(token, Some(expires_in))
}

/// A session whose provider did not report a token lifetime.
pub fn session_without_expiry(token: Option<&str>) -> Session {
    session_with_expiry(token, None)
}

fn session_with_expiry(token: Option<&str>, expires_in: Option<i64>) -> Session {
    let profile: Profile = serde_json::from_value(json!({
        "sub": "user-1",
        "name": "Alice"
    }))
    .expect("profile");
    Session::new(token.map(AccessToken::from), expires_in, profile)
}

pub fn network_error() -> SessionClientError {
    SessionClientError::Network {
        details: "connection refused".to_string(),
    }
}
