//! Configuration for the identity resolver.

use serde::Deserialize;

/// Configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IdentityResolverConfig {
    /// Key generic delegated logins on the typed identifier
    /// (`<ProfileType>#<id>`) instead of the raw provider id.
    ///
    /// Accounts provisioned from typed identifiers only keep resolving
    /// while this stays enabled.
    pub use_typed_id: bool,
}

impl Default for IdentityResolverConfig {
    fn default() -> Self {
        Self { use_typed_id: true }
    }
}
