//! The page's single OIDC client.
//!
//! One client exists per page load; it is installed once during boot and
//! read by event handlers afterwards.

use spa_oidc_browser::BrowserOidcClient;
use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
    static CLIENT: RefCell<Option<Rc<BrowserOidcClient>>> = const { RefCell::new(None) };
}

/// Installs the page's client, replacing any previous one.
pub fn install(client: Rc<BrowserOidcClient>) {
    CLIENT.with(|slot| *slot.borrow_mut() = Some(client));
}

/// Returns the page's client, if boot got far enough to create it.
pub fn client() -> Option<Rc<BrowserOidcClient>> {
    CLIENT.with(|slot| slot.borrow().clone())
}
