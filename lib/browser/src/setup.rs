//! Constructing the browser client.

use crate::bindings::enable_protocol_logging;
use crate::environment::BrowserEnvironment;
use crate::session_client::{BrowserSessionClient, describe};
use spa_oidc::{OidcClient, OidcConfig, OidcError, SessionSettings};
use spa_oidc_core::Result;
use tracing::{debug, info};

/// The facade over `oidc-client` in the current window.
pub type BrowserOidcClient = OidcClient<BrowserSessionClient, BrowserEnvironment>;

/// Creates the page's OIDC client from `config`.
///
/// Redirect URIs that are not configured default to the page origin
/// (post-logout) and origin + "/auth" (sign-in, silent, popup). Debug builds
/// also enable `oidc-client`'s own protocol logging.
pub async fn setup_oidc_client(config: &OidcConfig) -> Result<BrowserOidcClient, OidcError> {
    let environment = BrowserEnvironment::new()?;
    let origin = environment.origin()?;
    let settings = SessionSettings::from_config(config, &origin)?;

    if cfg!(debug_assertions) {
        if let Err(e) = enable_protocol_logging() {
            debug!(error = %describe(&e), "oidc-client logging unavailable");
        }
    }

    let client = BrowserSessionClient::new(config, settings)?;
    info!(
        authority = config.identity_provider_uri(),
        client_id = config.client_id(),
        "OIDC client configured"
    );
    Ok(OidcClient::setup(config, client, environment).await)
}
