//! Identity resolver module wiring.

use std::sync::Arc;

use anyhow::Context;
use identity_resolver_sdk::{
    IdentityResolverClient, InstitutionRegistry, TokenStore, UserIdentifierStore,
};
use serde::Deserialize;
use tracing::info;

use crate::config::IdentityResolverConfig;
use crate::domain::{
    DelegatedIdentityResolver, IdentityResolverLocalClient, Service, TokenPrincipalResolver,
};

/// Read-only collaborators the resolvers consult.
#[derive(Clone)]
pub struct Collaborators {
    pub tokens: Arc<dyn TokenStore>,
    pub identifiers: Arc<dyn UserIdentifierStore>,
    pub institutions: Arc<dyn InstitutionRegistry>,
}

impl Collaborators {
    /// Use one backend for all three lookups.
    #[must_use]
    pub fn from_backend<B>(backend: &Arc<B>) -> Self
    where
        B: TokenStore + UserIdentifierStore + InstitutionRegistry + 'static,
    {
        Self {
            tokens: backend.clone(),
            identifiers: backend.clone(),
            institutions: backend.clone(),
        }
    }
}

/// Build the identity resolver client.
///
/// `config` is this module's section of the host configuration; `None`
/// selects the defaults.
///
/// # Errors
///
/// Returns an error if the configuration section cannot be deserialized.
#[tracing::instrument(skip_all, fields(use_typed_id))]
pub fn init(
    config: Option<&serde_json::Value>,
    collaborators: Collaborators,
) -> anyhow::Result<Arc<dyn IdentityResolverClient>> {
    let cfg: IdentityResolverConfig = match config {
        Some(value) => IdentityResolverConfig::deserialize(value)
            .context("invalid identity_resolver configuration")?,
        None => IdentityResolverConfig::default(),
    };
    tracing::Span::current().record("use_typed_id", cfg.use_typed_id);
    info!(use_typed_id = cfg.use_typed_id, "Initializing identity_resolver");

    let Collaborators {
        tokens,
        identifiers,
        institutions,
    } = collaborators;

    let svc = Arc::new(Service::new(
        TokenPrincipalResolver::new(tokens, identifiers),
        DelegatedIdentityResolver::new(institutions),
        &cfg,
    ));

    Ok(Arc::new(IdentityResolverLocalClient::new(svc)))
}
