//! `fetch` requests that accept deferred headers.

use crate::error::FetchError;
use crate::session_client::describe;
use spa_oidc::{HeaderMapping, OutboundRequest, PendingHeaders};
use spa_oidc_core::Result;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// An outbound `fetch` request.
///
/// Deferred headers registered through [`OutboundRequest::set_headers`] are
/// awaited when the request is sent and override headers set directly.
pub struct FetchRequest {
    method: String,
    url: String,
    headers: HeaderMapping,
    body: Option<String>,
    pending: Vec<PendingHeaders>,
}

impl FetchRequest {
    #[must_use]
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            headers: HeaderMapping::new(),
            body: None,
            pending: Vec::new(),
        }
    }

    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self::new("GET", url)
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Awaits all deferred headers and returns the merged mapping.
    pub async fn resolve_headers(&mut self) -> &HeaderMapping {
        for pending in std::mem::take(&mut self.pending) {
            self.headers.extend(pending.await);
        }
        &self.headers
    }

    /// Sends the request with `window.fetch`.
    pub async fn send(mut self) -> Result<Response, FetchError> {
        self.resolve_headers().await;

        let init = RequestInit::new();
        init.set_method(&self.method);
        if let Some(body) = &self.body {
            init.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(&self.url, &init).map_err(invalid)?;
        for (name, value) in &self.headers {
            request.headers().set(name, value).map_err(invalid)?;
        }

        let window = web_sys::window().ok_or(FetchError::NoWindow)?;
        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| FetchError::Network {
                details: describe(&e),
            })?;
        Ok(response.dyn_into::<Response>().map_err(invalid)?)
    }
}

impl OutboundRequest for FetchRequest {
    fn set_headers(&mut self, headers: PendingHeaders) {
        self.pending.push(headers);
    }
}

fn invalid(e: JsValue) -> FetchError {
    FetchError::InvalidRequest {
        details: describe(&e),
    }
}
