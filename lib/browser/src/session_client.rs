//! [`SessionClient`] backed by the `oidc-client` `UserManager`.

use crate::bindings::{User, UserManager};
use crate::events::BrowserEvents;
use async_trait::async_trait;
use js_sys::Promise;
use serde::Serialize;
use spa_oidc::{OidcConfig, OidcError, Session, SessionClient, SessionClientError, SessionSettings};
use spa_oidc_core::{AccessToken, Profile, Result};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Settings object passed to the `UserManager` constructor.
#[derive(Debug, Serialize)]
pub(crate) struct UserManagerSettings<'a> {
    authority: &'a str,
    client_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_secret: Option<&'a str>,
    redirect_uri: &'a str,
    silent_redirect_uri: &'a str,
    popup_redirect_uri: &'a str,
    post_logout_redirect_uri: &'a str,
    response_type: &'a str,
    scope: String,
}

impl<'a> UserManagerSettings<'a> {
    pub(crate) fn new(config: &'a OidcConfig, settings: &'a SessionSettings) -> Self {
        Self {
            authority: config.identity_provider_uri(),
            client_id: config.client_id(),
            client_secret: config.client_secret(),
            redirect_uri: settings.redirect_uri().as_str(),
            silent_redirect_uri: settings.silent_redirect_uri().as_str(),
            popup_redirect_uri: settings.popup_redirect_uri().as_str(),
            post_logout_redirect_uri: settings.post_logout_redirect_uri().as_str(),
            response_type: config.response_type(),
            scope: config.scope(),
        }
    }

    fn to_js(&self) -> std::result::Result<JsValue, SessionClientError> {
        let json = serde_json::to_string(self).map_err(|e| SessionClientError::Unavailable {
            details: format!("failed to encode settings: {e}"),
        })?;
        js_sys::JSON::parse(&json).map_err(|e| SessionClientError::Unavailable {
            details: describe(&e),
        })
    }
}

/// Session client wrapping one `Oidc.UserManager`.
pub struct BrowserSessionClient {
    manager: UserManager,
    settings: SessionSettings,
    events: BrowserEvents,
}

impl BrowserSessionClient {
    /// Creates the `UserManager` for `config`.
    ///
    /// Fails when the `oidc-client` bundle is not loaded or rejects the
    /// settings.
    pub fn new(config: &OidcConfig, settings: SessionSettings) -> Result<Self, OidcError> {
        let js_settings = UserManagerSettings::new(config, &settings)
            .to_js()
            .map_err(OidcError::from)?;
        let manager = UserManager::new(&js_settings).map_err(|e| {
            OidcError::from(SessionClientError::Unavailable {
                details: describe(&e),
            })
        })?;
        let events = BrowserEvents::new(manager.events());

        Ok(Self {
            manager,
            settings,
            events,
        })
    }
}

#[async_trait(?Send)]
impl SessionClient for BrowserSessionClient {
    type Events = BrowserEvents;

    async fn get_user(&self) -> std::result::Result<Option<Session>, SessionClientError> {
        to_session(settle(self.manager.get_user()).await?)
    }

    async fn signin_redirect(&self) -> std::result::Result<(), SessionClientError> {
        settle(self.manager.signin_redirect()).await.map(drop)
    }

    async fn signout_redirect(&self) -> std::result::Result<(), SessionClientError> {
        settle(self.manager.signout_redirect()).await.map(drop)
    }

    async fn signin_silent(&self) -> std::result::Result<Option<Session>, SessionClientError> {
        to_session(settle(self.manager.signin_silent()).await?)
    }

    async fn signin_silent_callback(&self) -> std::result::Result<(), SessionClientError> {
        settle(self.manager.signin_silent_callback()).await.map(drop)
    }

    async fn signin_callback(&self) -> std::result::Result<(), SessionClientError> {
        settle(self.manager.signin_callback()).await.map(drop)
    }

    async fn signout_redirect_callback(&self) -> std::result::Result<(), SessionClientError> {
        settle(self.manager.signout_redirect_callback()).await.map(drop)
    }

    async fn signout_popup_callback(&self) -> std::result::Result<(), SessionClientError> {
        settle(self.manager.signout_popup_callback()).await.map(drop)
    }

    fn events(&self) -> &BrowserEvents {
        &self.events
    }

    fn settings(&self) -> &SessionSettings {
        &self.settings
    }
}

async fn settle(promise: Promise) -> std::result::Result<JsValue, SessionClientError> {
    JsFuture::from(promise)
        .await
        .map_err(|e| classify_failure(describe(&e)))
}

/// Converts a resolved `User` (or `null`) into a session snapshot.
///
/// A user without `expires_in` has an unknown lifetime: its token is renewed
/// before use, its profile is still readable.
fn to_session(value: JsValue) -> std::result::Result<Option<Session>, SessionClientError> {
    if value.is_null() || value.is_undefined() {
        return Ok(None);
    }
    let user: User = value.unchecked_into();
    let profile = match js_sys::JSON::stringify(&user.profile()) {
        Ok(json) => parse_profile(json.as_string().as_deref())?,
        Err(e) => {
            return Err(SessionClientError::Protocol {
                details: describe(&e),
            });
        }
    };
    let expires_in = user.expires_in().map(|secs| secs.floor() as i64);

    Ok(Some(Session::new(
        user.access_token().map(AccessToken::new),
        expires_in,
        profile,
    )))
}

fn parse_profile(json: Option<&str>) -> std::result::Result<Profile, SessionClientError> {
    match json {
        None | Some("null") => Ok(Profile::default()),
        Some(json) => serde_json::from_str(json).map_err(|e| SessionClientError::Protocol {
            details: format!("unreadable profile claims: {e}"),
        }),
    }
}

/// Maps an `oidc-client` rejection message onto the error taxonomy.
fn classify_failure(message: String) -> SessionClientError {
    let lower = message.to_ascii_lowercase();
    if lower.contains("timed out") {
        SessionClientError::Timeout
    } else if lower.contains("network error") || lower.contains("failed to fetch") {
        SessionClientError::Network { details: message }
    } else {
        SessionClientError::Protocol { details: message }
    }
}

/// Extracts a readable message from a thrown JavaScript value.
pub(crate) fn describe(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
