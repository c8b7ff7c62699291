//! Authorization header decoration for outbound requests.
//!
//! Header injection must never block or break an unrelated request: the
//! request receives a deferred header mapping that resolves to the bearer
//! header, or to nothing when no token can be retrieved.

use crate::client::SessionClient;
use crate::retriever::TokenRetriever;
use futures::future::LocalBoxFuture;
use std::collections::BTreeMap;
use tracing::debug;

/// Name of the header carrying the bearer token.
pub const AUTHORIZATION: &str = "Authorization";

/// Header names mapped to values.
pub type HeaderMapping = BTreeMap<String, String>;

/// A header mapping that becomes available later.
pub type PendingHeaders = LocalBoxFuture<'static, HeaderMapping>;

/// An outbound request that can take headers from a future.
///
/// Implementations await the pending mapping before sending and merge it
/// into the request's own headers.
pub trait OutboundRequest {
    /// Registers headers to be applied once `headers` resolves.
    fn set_headers(&mut self, headers: PendingHeaders);
}

/// Resolves the bearer header, or an empty mapping if retrieval fails.
pub(crate) async fn authorization_headers<S: SessionClient>(
    retriever: TokenRetriever<S>,
) -> HeaderMapping {
    let mut headers = HeaderMapping::new();
    match retriever.retrieve_token().await {
        Ok(token) if !token.is_empty() => {
            headers.insert(AUTHORIZATION.to_string(), token.bearer());
        }
        Ok(_) => {}
        Err(report) => {
            debug!(error = %report.current_context(), "sending request without authorization");
        }
    }
    headers
}
