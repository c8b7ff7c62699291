//! Shell UI, mounted only once the visitor is authenticated.

use crate::session;
use futures::StreamExt;
use leptos::prelude::*;
use leptos::task::spawn_local;
use spa_oidc::SessionEvent;
use spa_oidc_browser::FetchRequest;

/// Main application component.
#[component]
pub fn App(display_name: Option<String>, api_uri: Option<String>) -> impl IntoView {
    let greeting = display_name
        .map(|name| format!("Welcome, {name}!"))
        .unwrap_or_else(|| "Welcome!".to_string());

    view! {
        <main class="app">
            <header class="app-header">
                <h1>{greeting}</h1>
                <LogoutButton/>
            </header>
            <SessionNotice/>
            {api_uri.map(|uri| view! { <ApiProbe uri=uri/> })}
        </main>
    }
}

/// Shown instead of the application when authentication cannot complete.
///
/// A failed callback usually means misconfiguration or clock skew; a fresh
/// logout/login cycle is the way out.
#[component]
pub fn AuthError(message: String) -> impl IntoView {
    let login = move |_| {
        spawn_local(async {
            if let Some(client) = session::client() {
                if let Err(report) = client.login().await {
                    tracing::error!(error = %report, "login failed");
                }
            }
        });
    };

    view! {
        <main class="auth-error">
            <h1>"Sign-in failed"</h1>
            <p class="error">{message}</p>
            <div class="actions">
                <button on:click=login>"Sign in again"</button>
                <LogoutButton/>
            </div>
        </main>
    }
}

#[component]
fn LogoutButton() -> impl IntoView {
    let logout = move |_| {
        spawn_local(async {
            if let Some(client) = session::client() {
                if let Err(report) = client.logout().await {
                    tracing::error!(error = %report, "logout failed");
                }
            }
        });
    };

    view! { <button class="logout" on:click=logout>"Sign out"</button> }
}

/// Displays the most recent session event reported by `oidc-client`.
#[component]
fn SessionNotice() -> impl IntoView {
    let (last_event, set_last_event) = signal(None::<SessionEvent>);

    if let Some(client) = session::client() {
        let mut events = client.events().subscribe();
        spawn_local(async move {
            while let Some(event) = events.next().await {
                tracing::debug!(%event, "session event");
                set_last_event.set(Some(event));
            }
        });
    }

    view! {
        <p class="session-notice">
            {move || last_event.get().map(|event| format!("Last session event: {event}"))}
        </p>
    }
}

/// Calls a protected endpoint with the session's bearer token.
#[component]
fn ApiProbe(uri: String) -> impl IntoView {
    let (status, set_status) = signal(None::<String>);

    let call = move |_| {
        let uri = uri.clone();
        spawn_local(async move {
            let Some(client) = session::client() else {
                return;
            };
            let mut request = FetchRequest::get(uri);
            client.extend_headers(&mut request);
            let text = match request.send().await {
                Ok(response) => format!("{} {}", response.status(), response.status_text()),
                Err(e) => e.to_string(),
            };
            set_status.set(Some(text));
        });
    };

    view! {
        <section class="api-probe">
            <button on:click=call>"Call API"</button>
            <p class="status">{move || status.get()}</p>
        </section>
    }
}
