//! `oidc-client` events as a stream of [`SessionEvent`]s.

use crate::bindings::UserManagerEvents;
use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use js_sys::Function;
use spa_oidc::SessionEvent;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

type Register = fn(&UserManagerEvents, &Function);

const HANDLERS: [(SessionEvent, Register); 6] = [
    (SessionEvent::UserLoaded, UserManagerEvents::add_user_loaded),
    (SessionEvent::UserUnloaded, UserManagerEvents::add_user_unloaded),
    (
        SessionEvent::AccessTokenExpiring,
        UserManagerEvents::add_access_token_expiring,
    ),
    (
        SessionEvent::AccessTokenExpired,
        UserManagerEvents::add_access_token_expired,
    ),
    (
        SessionEvent::SilentRenewError,
        UserManagerEvents::add_silent_renew_error,
    ),
    (
        SessionEvent::UserSignedOut,
        UserManagerEvents::add_user_signed_out,
    ),
];

/// The `UserManager`'s event source.
pub struct BrowserEvents {
    events: UserManagerEvents,
}

impl BrowserEvents {
    pub(crate) fn new(events: UserManagerEvents) -> Self {
        Self { events }
    }

    /// Returns the underlying `oidc-client` events object.
    #[must_use]
    pub fn raw(&self) -> &UserManagerEvents {
        &self.events
    }

    /// Subscribes to all session events.
    ///
    /// The registered handlers live as long as the page.
    #[must_use]
    pub fn subscribe(&self) -> UnboundedReceiver<SessionEvent> {
        let (tx, rx) = mpsc::unbounded();
        for (event, register) in HANDLERS {
            self.forward(event, register, tx.clone());
        }
        rx
    }

    fn forward(&self, event: SessionEvent, register: Register, tx: UnboundedSender<SessionEvent>) {
        let handler = Closure::<dyn FnMut()>::new(move || {
            // The receiver may have been dropped; events are then discarded.
            let _ = tx.unbounded_send(event);
        });
        register(&self.events, handler.as_ref().unchecked_ref());
        handler.forget();
    }
}
