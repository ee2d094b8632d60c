//! Static identity plugin module.

use std::sync::Arc;

use anyhow::Context;
use serde::Deserialize;
use tracing::info;

use crate::config::StaticIdentityPluginConfig;
use crate::domain::Service;

/// Static identity plugin module.
///
/// Loads its configuration section and exposes a [`Service`] that
/// implements every identity resolver collaborator trait.
pub struct StaticIdentityPlugin;

impl StaticIdentityPlugin {
    /// Build the static backend from this plugin's configuration section.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration section cannot be deserialized.
    pub fn init(config: Option<&serde_json::Value>) -> anyhow::Result<Arc<Service>> {
        info!("Initializing static_identity_plugin");

        let cfg = match config {
            Some(value) => StaticIdentityPluginConfig::deserialize(value)
                .context("invalid static_identity_plugin configuration")?,
            None => StaticIdentityPluginConfig::default(),
        };

        tracing::warn!(
            "Static identity plugin serves tokens and identifiers from configuration. \
             Do NOT use it in production."
        );

        info!(
            token_count = cfg.tokens.len(),
            identifier_count = cfg.identifiers.len(),
            institution_count = cfg.institutions.len(),
            "Loaded plugin configuration"
        );

        Ok(Arc::new(Service::from_config(&cfg)))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn init_without_config_is_empty() {
        let service = StaticIdentityPlugin::init(None).unwrap();
        assert_eq!(service.token_count(), 0);
    }

    #[test]
    fn init_loads_tokens() {
        let config = json!({ "tokens": [{ "token_id": "pat-dev", "owner": "1" }] });

        let service = StaticIdentityPlugin::init(Some(&config)).unwrap();

        assert_eq!(service.token_count(), 1);
    }

    #[test]
    fn init_rejects_malformed_config() {
        let config = json!({ "institutions": "okstate" });

        assert!(StaticIdentityPlugin::init(Some(&config)).is_err());
    }
}
