//! spa-oidc web shell.
//!
//! A Leptos client-side application that authenticates the visitor before
//! anything is mounted. Page loads that belong to a callback or a redirect to
//! the identity provider never render.

#![allow(non_snake_case)]

pub mod app;
pub mod config;
pub mod session;

/// Boots the shell: logging, configuration, authentication, then the UI.
#[cfg(feature = "csr")]
pub fn start() {
    console_error_panic_hook::set_once();
    spa_oidc_browser::init_logging(spa_oidc_browser::default_level());
    leptos::task::spawn_local(boot());
}

#[cfg(feature = "csr")]
async fn boot() {
    use crate::app::{App, AuthError};
    use crate::config::WebConfig;
    use leptos::prelude::*;
    use std::rc::Rc;

    let config = match WebConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            let message = e.to_string();
            leptos::mount::mount_to_body(move || view! { <AuthError message=message/> });
            return;
        }
    };

    let client = match spa_oidc_browser::setup_oidc_client(&config.oidc).await {
        Ok(client) => Rc::new(client),
        Err(report) => {
            tracing::error!(error = %report, "failed to create OIDC client");
            let message = report.current_context().to_string();
            leptos::mount::mount_to_body(move || view! { <AuthError message=message/> });
            return;
        }
    };
    session::install(client.clone());

    match client.handle_authentication().await {
        Ok(outcome) if outcome.render_now() => {
            let display_name = client
                .account()
                .await
                .ok()
                .and_then(|profile| profile.display_name().map(str::to_owned));
            let api_uri = config.api_uri;
            leptos::mount::mount_to_body(move || {
                view! { <App display_name=display_name api_uri=api_uri/> }
            });
        }
        Ok(_) => tracing::debug!("navigation pending, not rendering"),
        Err(report) => {
            tracing::error!(error = %report, "authentication failed");
            let message = report.current_context().to_string();
            leptos::mount::mount_to_body(move || view! { <AuthError message=message/> });
        }
    }
}
