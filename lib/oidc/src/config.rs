//! Orchestrator configuration.
//!
//! The configuration is immutable once the client facade is constructed.
//! URIs are not validated here; the session client owns their interpretation,
//! and [`SessionSettings`](crate::SessionSettings) parses only what the
//! classifier needs.

use serde::{Deserialize, Serialize};

/// Configuration for the OIDC orchestrator.
///
/// Fields with defaults can be omitted when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OidcConfig {
    /// The identity provider (authority) URI, e.g. "https://auth.example.com/realms/main".
    identity_provider_uri: String,
    /// The client ID registered with the provider.
    client_id: String,
    /// The client secret, for providers that require one for public clients.
    #[serde(default)]
    client_secret: Option<String>,
    /// Redirect URI for the sign-in callback.
    /// Default: page origin + "/auth"
    #[serde(default)]
    redirect_uri: Option<String>,
    /// Redirect URI after sign-out.
    /// Default: page origin
    #[serde(default)]
    post_logout_redirect_uri: Option<String>,
    /// OIDC response type.
    /// Default: "code"
    #[serde(default = "default_response_type")]
    response_type: String,
    /// Requested scopes, in order.
    /// Default: ["openid"]
    #[serde(default = "default_scopes")]
    scopes: Vec<String>,
    /// Disables automatic `Authorization` header injection.
    #[serde(default)]
    restrict: bool,
    /// Application URI to navigate to after a completed sign-in callback.
    #[serde(default)]
    app_uri: Option<String>,
}

fn default_response_type() -> String {
    "code".to_string()
}

fn default_scopes() -> Vec<String> {
    vec!["openid".to_string()]
}

impl OidcConfig {
    /// Creates a configuration with defaults for all optional fields.
    #[must_use]
    pub fn new(identity_provider_uri: String, client_id: String) -> Self {
        OidcConfigBuilder::new(identity_provider_uri, client_id).build()
    }

    /// Creates a configuration builder for more customization.
    #[must_use]
    pub fn builder(identity_provider_uri: String, client_id: String) -> OidcConfigBuilder {
        OidcConfigBuilder::new(identity_provider_uri, client_id)
    }

    #[must_use]
    pub fn identity_provider_uri(&self) -> &str {
        &self.identity_provider_uri
    }

    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    #[must_use]
    pub fn client_secret(&self) -> Option<&str> {
        self.client_secret.as_deref()
    }

    /// Returns the configured redirect URI, if one was set explicitly.
    #[must_use]
    pub fn redirect_uri(&self) -> Option<&str> {
        self.redirect_uri.as_deref()
    }

    /// Returns the configured post-logout redirect URI, if one was set explicitly.
    #[must_use]
    pub fn post_logout_redirect_uri(&self) -> Option<&str> {
        self.post_logout_redirect_uri.as_deref()
    }

    #[must_use]
    pub fn response_type(&self) -> &str {
        &self.response_type
    }

    /// Returns the requested scopes in order.
    #[must_use]
    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    /// Returns the scopes as the space-separated protocol `scope` parameter.
    #[must_use]
    pub fn scope(&self) -> String {
        self.scopes.join(" ")
    }

    /// Returns true if automatic header injection is disabled.
    #[must_use]
    pub fn restrict(&self) -> bool {
        self.restrict
    }

    #[must_use]
    pub fn app_uri(&self) -> Option<&str> {
        self.app_uri.as_deref()
    }
}

/// Builder for `OidcConfig`.
#[derive(Debug)]
pub struct OidcConfigBuilder {
    identity_provider_uri: String,
    client_id: String,
    client_secret: Option<String>,
    redirect_uri: Option<String>,
    post_logout_redirect_uri: Option<String>,
    response_type: String,
    scopes: Vec<String>,
    restrict: bool,
    app_uri: Option<String>,
}

impl OidcConfigBuilder {
    /// Creates a new builder with required fields.
    #[must_use]
    pub fn new(identity_provider_uri: String, client_id: String) -> Self {
        Self {
            identity_provider_uri,
            client_id,
            client_secret: None,
            redirect_uri: None,
            post_logout_redirect_uri: None,
            response_type: default_response_type(),
            scopes: default_scopes(),
            restrict: false,
            app_uri: None,
        }
    }

    #[must_use]
    pub fn client_secret(mut self, secret: String) -> Self {
        self.client_secret = Some(secret);
        self
    }

    #[must_use]
    pub fn redirect_uri(mut self, uri: String) -> Self {
        self.redirect_uri = Some(uri);
        self
    }

    #[must_use]
    pub fn post_logout_redirect_uri(mut self, uri: String) -> Self {
        self.post_logout_redirect_uri = Some(uri);
        self
    }

    #[must_use]
    pub fn response_type(mut self, response_type: String) -> Self {
        self.response_type = response_type;
        self
    }

    /// Sets the scopes to request, replacing the defaults.
    #[must_use]
    pub fn scopes(mut self, scopes: Vec<String>) -> Self {
        self.scopes = scopes;
        self
    }

    /// Adds a scope to the list of scopes to request.
    #[must_use]
    pub fn add_scope(mut self, scope: String) -> Self {
        if !self.scopes.contains(&scope) {
            self.scopes.push(scope);
        }
        self
    }

    #[must_use]
    pub fn restrict(mut self, restrict: bool) -> Self {
        self.restrict = restrict;
        self
    }

    #[must_use]
    pub fn app_uri(mut self, uri: String) -> Self {
        self.app_uri = Some(uri);
        self
    }

    /// Builds the `OidcConfig`.
    #[must_use]
    pub fn build(self) -> OidcConfig {
        OidcConfig {
            identity_provider_uri: self.identity_provider_uri,
            client_id: self.client_id,
            client_secret: self.client_secret,
            redirect_uri: self.redirect_uri,
            post_logout_redirect_uri: self.post_logout_redirect_uri,
            response_type: self.response_type,
            scopes: self.scopes,
            restrict: self.restrict,
            app_uri: self.app_uri,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_config_has_defaults() {
        let config = OidcConfig::new(
            "https://auth.example.com".to_string(),
            "spa".to_string(),
        );

        assert_eq!(config.identity_provider_uri(), "https://auth.example.com");
        assert_eq!(config.client_id(), "spa");
        assert!(config.client_secret().is_none());
        assert!(config.redirect_uri().is_none());
        assert!(config.post_logout_redirect_uri().is_none());
        assert_eq!(config.response_type(), "code");
        assert_eq!(config.scopes(), ["openid"]);
        assert!(!config.restrict());
        assert!(config.app_uri().is_none());
    }

    #[test]
    fn builder_allows_customization() {
        let config = OidcConfig::builder(
            "https://auth.example.com".to_string(),
            "spa".to_string(),
        )
        .client_secret("shh".to_string())
        .redirect_uri("https://app.example/callback".to_string())
        .post_logout_redirect_uri("https://app.example/bye".to_string())
        .response_type("id_token token".to_string())
        .add_scope("profile".to_string())
        .restrict(true)
        .app_uri("https://app.example/home".to_string())
        .build();

        assert_eq!(config.client_secret(), Some("shh"));
        assert_eq!(config.redirect_uri(), Some("https://app.example/callback"));
        assert_eq!(
            config.post_logout_redirect_uri(),
            Some("https://app.example/bye")
        );
        assert_eq!(config.response_type(), "id_token token");
        assert!(config.restrict());
        assert_eq!(config.app_uri(), Some("https://app.example/home"));
    }

    #[test]
    fn builder_add_scope_does_not_duplicate() {
        let config = OidcConfig::builder(
            "https://auth.example.com".to_string(),
            "spa".to_string(),
        )
        .add_scope("openid".to_string())
        .add_scope("email".to_string())
        .build();

        assert_eq!(config.scopes(), ["openid", "email"]);
    }

    #[test]
    fn scope_joins_with_spaces_in_order() {
        let config = OidcConfig::builder(
            "https://auth.example.com".to_string(),
            "spa".to_string(),
        )
        .scopes(vec![
            "openid".to_string(),
            "profile".to_string(),
            "api.read".to_string(),
        ])
        .build();

        assert_eq!(config.scope(), "openid profile api.read");
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let json = r#"{
            "identity_provider_uri": "https://auth.example.com",
            "client_id": "spa"
        }"#;

        let config: OidcConfig = serde_json::from_str(json).expect("deserialize");

        assert_eq!(config, OidcConfig::new("https://auth.example.com".to_string(), "spa".to_string()));
    }

    #[test]
    fn config_deserializes_all_fields() {
        let json = r#"{
            "identity_provider_uri": "https://auth.example.com",
            "client_id": "spa",
            "redirect_uri": "https://app.example/auth",
            "scopes": ["openid", "email"],
            "restrict": true,
            "app_uri": "https://app.example/"
        }"#;

        let config: OidcConfig = serde_json::from_str(json).expect("deserialize");

        assert_eq!(config.redirect_uri(), Some("https://app.example/auth"));
        assert_eq!(config.scope(), "openid email");
        assert!(config.restrict());
        assert_eq!(config.app_uri(), Some("https://app.example/"));
    }
}
