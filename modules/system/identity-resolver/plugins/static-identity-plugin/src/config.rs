//! Configuration for the static identity plugin.

use serde::Deserialize;

/// Plugin configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticIdentityPluginConfig {
    /// Personal access token records.
    pub tokens: Vec<TokenConfig>,

    /// Owner-to-guid mappings.
    pub identifiers: Vec<IdentifierMapping>,

    /// Client names registered as institution delegated-login clients.
    pub institutions: Vec<String>,
}

/// A personal access token record.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenConfig {
    pub token_id: String,
    pub owner: String,
    /// Space-delimited scopes; omitted means none.
    #[serde(default)]
    pub scopes: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Maps a token owner to its public identifier.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IdentifierMapping {
    pub owner: String,
    pub guid: String,
}
