//! Identity claims returned by the provider about the authenticated subject.
//!
//! Claim keys are provider-defined. The well-known OIDC standard claims get
//! typed accessors; everything else is reachable through [`Profile::claim`]
//! or [`Profile::get`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Read-only claims mapping for the signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profile(Map<String, Value>);

impl Profile {
    /// Creates a profile from a claims map.
    #[must_use]
    pub fn new(claims: Map<String, Value>) -> Self {
        Self(claims)
    }

    /// Returns the raw claim value for `key`, if present.
    #[must_use]
    pub fn claim(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Deserializes the claim under `key` into `T`.
    ///
    /// Returns `None` when the claim is missing or has a different shape.
    #[must_use]
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.0
            .get(key)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    /// The `sub` claim.
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.str_claim("sub")
    }

    /// The `name` claim, falling back to `preferred_username`.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.str_claim("name")
            .or_else(|| self.str_claim("preferred_username"))
    }

    /// The `email` claim.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.str_claim("email")
    }

    /// Iterates over all claims.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Returns true if the profile carries no claims.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn str_claim(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

impl From<Map<String, Value>> for Profile {
    fn from(claims: Map<String, Value>) -> Self {
        Self(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile(value: Value) -> Profile {
        serde_json::from_value(value).expect("deserialize profile")
    }

    #[test]
    fn standard_claims_are_exposed() {
        let p = profile(json!({
            "sub": "auth0|123",
            "name": "Alice",
            "email": "alice@example.com"
        }));

        assert_eq!(p.subject(), Some("auth0|123"));
        assert_eq!(p.display_name(), Some("Alice"));
        assert_eq!(p.email(), Some("alice@example.com"));
    }

    #[test]
    fn display_name_falls_back_to_preferred_username() {
        let p = profile(json!({ "preferred_username": "alice" }));
        assert_eq!(p.display_name(), Some("alice"));
    }

    #[test]
    fn custom_claims_deserialize_on_demand() {
        let p = profile(json!({ "groups": ["admins", "users"], "tenant": 7 }));

        let groups: Vec<String> = p.get("groups").expect("groups claim");
        assert_eq!(groups, vec!["admins", "users"]);
        assert_eq!(p.get::<u32>("tenant"), Some(7));
        assert_eq!(p.get::<u32>("groups"), None);
        assert!(p.claim("missing").is_none());
    }

    #[test]
    fn default_profile_is_empty() {
        assert!(Profile::default().is_empty());
    }
}
