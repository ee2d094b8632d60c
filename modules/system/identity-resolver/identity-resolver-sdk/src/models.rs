//! Domain models for the identity resolver module.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Attributes released by an identity provider or carried on a principal.
///
/// Ordered so that two resolutions of the same input compare equal.
pub type Attributes = BTreeMap<String, serde_json::Value>;

/// Separator between the profile type tag and the raw id in a typed identifier.
pub const TYPED_ID_SEPARATOR: &str = "#";

/// Opaque reference to a user record in the token store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerRef(pub String);

impl OwnerRef {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

/// Personal access token record, as stored by the token store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub token_id: String,
    pub owner: OwnerRef,
    /// Space-delimited scope list; `None` when the token was issued without scopes.
    #[serde(default)]
    pub scopes: Option<String>,
    pub active: bool,
}

/// Stable public identifier (guid) of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentifier {
    pub owner: OwnerRef,
    pub guid: String,
}

/// Profile produced by the delegated-authentication subsystem for one login attempt.
///
/// The name of the client that released the profile travels with the
/// credential and is passed to the resolver separately.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalProfile {
    /// Raw identifier assigned by the identity provider.
    pub id: String,
    /// Identifier qualified by the profile type, e.g. `OrcidProfile#0000-1111`.
    #[serde(default)]
    pub typed_id: Option<String>,
    #[serde(default)]
    pub attributes: Attributes,
}

impl ExternalProfile {
    /// Profile carrying only a raw identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Profile whose typed identifier is `<profile_type>#<id>`.
    #[must_use]
    pub fn typed(profile_type: &str, id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            typed_id: Some(format!("{profile_type}{TYPED_ID_SEPARATOR}{id}")),
            id,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    /// The identifier to use for a generic delegated client.
    ///
    /// A missing typed identifier reads as the empty string.
    #[must_use]
    pub fn identifier(&self, use_typed_id: bool) -> &str {
        if use_typed_id {
            self.typed_id.as_deref().unwrap_or_default()
        } else {
            &self.id
        }
    }
}

/// Resolved internal identity.
///
/// The id is never blank; use [`Principal::new`] to construct one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Principal {
    id: String,
    attributes: Attributes,
}

impl Principal {
    /// Build a principal, or `None` when `id` is empty or whitespace only.
    #[must_use]
    pub fn new(id: impl Into<String>, attributes: Attributes) -> Option<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return None;
        }
        Some(Self { id, attributes })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

/// Result of resolving a personal access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedAccessToken {
    pub token_id: String,
    /// Public identifier of the token owner.
    pub principal_guid: String,
    /// Granted scopes; empty when the token carries none.
    pub scopes: BTreeSet<String>,
}

/// Context handed to the institution login flow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstitutionLogin {
    /// Institution id, identical to the delegated client name.
    pub institution_id: String,
    /// Attributes released by the institution's identity provider.
    pub delegated_attributes: Attributes,
}

/// Result of resolving a delegated login.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DelegatedAuthentication {
    pub principal: Principal,
    /// Delegated client that authenticated the user.
    pub client_name: String,
    /// Whether the typed-id policy was in effect for this login.
    pub typed_id_used: bool,
    /// Present only for institution delegated-login clients.
    pub institution: Option<InstitutionLogin>,
}

impl DelegatedAuthentication {
    #[must_use]
    pub fn is_institution_login(&self) -> bool {
        self.institution.is_some()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn typed_profile_prefixes_type_tag() {
        let profile = ExternalProfile::typed("OrcidProfile", "0000-1111");

        assert_eq!(profile.id, "0000-1111");
        assert_eq!(profile.typed_id.as_deref(), Some("OrcidProfile#0000-1111"));
        assert_eq!(profile.identifier(true), "OrcidProfile#0000-1111");
        assert_eq!(profile.identifier(false), "0000-1111");
    }

    #[test]
    fn missing_typed_id_reads_as_empty() {
        let profile = ExternalProfile::new("raw-id");

        assert_eq!(profile.identifier(true), "");
        assert_eq!(profile.identifier(false), "raw-id");
    }

    #[test]
    fn principal_rejects_blank_id() {
        assert!(Principal::new("", Attributes::new()).is_none());
        assert!(Principal::new("  \t", Attributes::new()).is_none());
    }

    #[test]
    fn principal_keeps_id_and_attributes() {
        let mut attributes = Attributes::new();
        attributes.insert("mail".to_owned(), json!("user@example.edu"));

        let principal = Principal::new("okstate", attributes.clone()).unwrap();

        assert_eq!(principal.id(), "okstate");
        assert_eq!(principal.attributes(), &attributes);
    }

    #[test]
    fn profile_deserializes_with_defaults() {
        let profile: ExternalProfile = serde_json::from_value(json!({ "id": "42" })).unwrap();

        assert_eq!(profile, ExternalProfile::new("42"));
    }

    #[test]
    fn token_scopes_default_to_none() {
        let token: Token = serde_json::from_value(json!({
            "token_id": "t1",
            "owner": "17",
            "active": true
        }))
        .unwrap();

        assert_eq!(token.owner, OwnerRef::new("17"));
        assert!(token.scopes.is_none());
    }
}
