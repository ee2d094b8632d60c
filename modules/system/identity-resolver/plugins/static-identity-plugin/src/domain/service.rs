//! Service implementation for the static identity plugin.

use std::collections::{HashMap, HashSet};

use identity_resolver_sdk::{OwnerRef, Token, UserIdentifier};

use crate::config::StaticIdentityPluginConfig;

/// Static identity backend.
///
/// Holds token records, guid mappings and institution client names loaded
/// from configuration. Lookups never fail; unknown keys are simply absent.
pub struct Service {
    tokens: HashMap<String, Token>,
    guids: HashMap<OwnerRef, String>,
    institutions: HashSet<String>,
}

impl Service {
    /// Create a service from plugin configuration.
    ///
    /// Later entries win when a token id or owner is listed twice.
    #[must_use]
    pub fn from_config(cfg: &StaticIdentityPluginConfig) -> Self {
        let tokens = cfg
            .tokens
            .iter()
            .map(|t| {
                let token = Token {
                    token_id: t.token_id.clone(),
                    owner: OwnerRef::new(t.owner.as_str()),
                    scopes: t.scopes.clone(),
                    active: t.active,
                };
                (t.token_id.clone(), token)
            })
            .collect();

        let guids = cfg
            .identifiers
            .iter()
            .map(|m| (OwnerRef::new(m.owner.as_str()), m.guid.clone()))
            .collect();

        Self {
            tokens,
            guids,
            institutions: cfg.institutions.iter().cloned().collect(),
        }
    }

    /// Token record by id, active or not.
    #[must_use]
    pub fn token(&self, token_id: &str) -> Option<Token> {
        self.tokens.get(token_id).cloned()
    }

    #[must_use]
    pub fn identifier(&self, owner: &OwnerRef) -> Option<UserIdentifier> {
        self.guids.get(owner).map(|guid| UserIdentifier {
            owner: owner.clone(),
            guid: guid.clone(),
        })
    }

    #[must_use]
    pub fn is_institution(&self, client_name: &str) -> bool {
        self.institutions.contains(client_name)
    }

    #[must_use]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}
