//! Flow context classification.
//!
//! Silent renewal and popup flows run inside nested browsing contexts that
//! share the redirect-path convention with the top-level flow. The framing
//! relationship is what tells them apart, so every rule below checks it.
//!
//! Rules are evaluated in order and the first match wins:
//! 1. post-logout redirect path → [`FlowContext::PostLogoutRedirect`]
//! 2. silent or popup redirect path, framed → [`FlowContext::SilentRenewFrame`]
//!    or [`FlowContext::PopupCallback`] (silent path checked first)
//! 3. redirect path, top-level → [`FlowContext::TopLevelRedirectCallback`]
//! 4. anything else → [`FlowContext::Normal`]

use crate::environment::EnvironmentSnapshot;
use crate::settings::SessionSettings;

/// Which flow the current page load belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowContext {
    /// Hidden iframe completing a silent renewal.
    SilentRenewFrame,
    /// Nested frame loaded at the popup redirect path.
    PopupCallback,
    /// Top-level window returning from the provider's sign-in page.
    TopLevelRedirectCallback,
    /// Page returning from the provider's sign-out page.
    PostLogoutRedirect,
    /// Regular application page.
    Normal,
}

impl FlowContext {
    /// Classifies a page load, including the post-logout rule.
    ///
    /// Used once at orchestrator construction time.
    #[must_use]
    pub fn classify(env: &EnvironmentSnapshot, settings: &SessionSettings) -> Self {
        if env.path == settings.post_logout_redirect_uri().path() {
            return Self::PostLogoutRedirect;
        }
        Self::classify_callback(env, settings)
    }

    /// Classifies a page load for the authentication flow, skipping the
    /// post-logout rule (rules 2–4).
    #[must_use]
    pub fn classify_callback(env: &EnvironmentSnapshot, settings: &SessionSettings) -> Self {
        if !env.is_top_level {
            if env.path == settings.silent_redirect_uri().path() {
                return Self::SilentRenewFrame;
            }
            if env.path == settings.popup_redirect_uri().path() {
                return Self::PopupCallback;
            }
        } else if env.path == settings.redirect_uri().path() {
            return Self::TopLevelRedirectCallback;
        }
        Self::Normal
    }

    /// Returns true for contexts that run inside a nested browsing context
    /// and must never be rendered as the application.
    #[must_use]
    pub fn is_frame_callback(&self) -> bool {
        matches!(self, Self::SilentRenewFrame | Self::PopupCallback)
    }
}

impl std::fmt::Display for FlowContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::SilentRenewFrame => "silent_renew_frame",
            Self::PopupCallback => "popup_callback",
            Self::TopLevelRedirectCallback => "top_level_redirect_callback",
            Self::PostLogoutRedirect => "post_logout_redirect",
            Self::Normal => "normal",
        };
        write!(f, "{name}")
    }
}
