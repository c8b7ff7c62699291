//! Shell configuration.
//!
//! Loaded via the `config` crate from the TOML file compiled into the shell,
//! then from `SPA_OIDC__*` environment variables where an environment exists
//! (native test runs; the browser has none).
//!
//! See [`OidcConfig`](spa_oidc::OidcConfig) for the authentication settings.

use serde::Deserialize;
use spa_oidc::OidcConfig;

const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");

/// Shell configuration composed from library configs.
#[derive(Debug, Deserialize)]
pub struct WebConfig {
    /// OIDC authentication configuration.
    pub oidc: OidcConfig,

    /// Protected endpoint the shell calls with the bearer token.
    #[serde(default)]
    pub api_uri: Option<String>,
}

impl WebConfig {
    /// Loads the compiled-in configuration with environment overrides.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::from_toml(DEFAULT_CONFIG)
    }

    fn from_toml(toml: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .add_source(
                config::Environment::with_prefix("SPA_OIDC")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
