//! Bindings to the `oidc-client` JavaScript library.
//!
//! The library is loaded as a script bundle that exposes the `Oidc` global.

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::prelude::*;

/// `Oidc.Log.DEBUG`.
const LOG_LEVEL_DEBUG: u32 = 4;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Oidc)]
    pub type UserManager;

    #[wasm_bindgen(constructor, js_namespace = Oidc, catch)]
    pub fn new(settings: &JsValue) -> Result<UserManager, JsValue>;

    #[wasm_bindgen(method, js_name = getUser)]
    pub fn get_user(this: &UserManager) -> Promise;

    #[wasm_bindgen(method, js_name = signinRedirect)]
    pub fn signin_redirect(this: &UserManager) -> Promise;

    #[wasm_bindgen(method, js_name = signoutRedirect)]
    pub fn signout_redirect(this: &UserManager) -> Promise;

    #[wasm_bindgen(method, js_name = signinSilent)]
    pub fn signin_silent(this: &UserManager) -> Promise;

    #[wasm_bindgen(method, js_name = signinSilentCallback)]
    pub fn signin_silent_callback(this: &UserManager) -> Promise;

    #[wasm_bindgen(method, js_name = signinCallback)]
    pub fn signin_callback(this: &UserManager) -> Promise;

    #[wasm_bindgen(method, js_name = signoutRedirectCallback)]
    pub fn signout_redirect_callback(this: &UserManager) -> Promise;

    #[wasm_bindgen(method, js_name = signoutPopupCallback)]
    pub fn signout_popup_callback(this: &UserManager) -> Promise;

    #[wasm_bindgen(method, getter)]
    pub fn events(this: &UserManager) -> UserManagerEvents;

    /// A signed-in user as stored by `oidc-client`.
    pub type User;

    #[wasm_bindgen(method, getter)]
    pub fn access_token(this: &User) -> Option<String>;

    #[wasm_bindgen(method, getter)]
    pub fn expires_in(this: &User) -> Option<f64>;

    #[wasm_bindgen(method, getter)]
    pub fn profile(this: &User) -> JsValue;

    pub type UserManagerEvents;

    #[wasm_bindgen(method, js_name = addUserLoaded)]
    pub fn add_user_loaded(this: &UserManagerEvents, callback: &Function);

    #[wasm_bindgen(method, js_name = addUserUnloaded)]
    pub fn add_user_unloaded(this: &UserManagerEvents, callback: &Function);

    #[wasm_bindgen(method, js_name = addAccessTokenExpiring)]
    pub fn add_access_token_expiring(this: &UserManagerEvents, callback: &Function);

    #[wasm_bindgen(method, js_name = addAccessTokenExpired)]
    pub fn add_access_token_expired(this: &UserManagerEvents, callback: &Function);

    #[wasm_bindgen(method, js_name = addSilentRenewError)]
    pub fn add_silent_renew_error(this: &UserManagerEvents, callback: &Function);

    #[wasm_bindgen(method, js_name = addUserSignedOut)]
    pub fn add_user_signed_out(this: &UserManagerEvents, callback: &Function);
}

/// Routes the library's own protocol logging to the browser console at
/// debug level (`Oidc.Log.logger = console; Oidc.Log.level = Oidc.Log.DEBUG`).
pub fn enable_protocol_logging() -> Result<(), JsValue> {
    let global = js_sys::global();
    let oidc = Reflect::get(&global, &JsValue::from_str("Oidc"))?;
    let log = Reflect::get(&oidc, &JsValue::from_str("Log"))?;
    let console = Reflect::get(&global, &JsValue::from_str("console"))?;
    Reflect::set(&log, &JsValue::from_str("logger"), &console)?;
    Reflect::set(
        &log,
        &JsValue::from_str("level"),
        &JsValue::from(LOG_LEVEL_DEBUG),
    )?;
    Ok(())
}
