//! Domain service composing the token and delegated resolvers.

use identity_resolver_sdk::{DelegatedAuthentication, ExternalProfile, ResolvedAccessToken};

use super::delegated_resolver::DelegatedIdentityResolver;
use super::error::DomainError;
use super::token_resolver::TokenPrincipalResolver;
use crate::config::IdentityResolverConfig;

/// Identity resolver service.
pub struct Service {
    tokens: TokenPrincipalResolver,
    delegated: DelegatedIdentityResolver,
    use_typed_id: bool,
}

impl Service {
    #[must_use]
    pub fn new(
        tokens: TokenPrincipalResolver,
        delegated: DelegatedIdentityResolver,
        cfg: &IdentityResolverConfig,
    ) -> Self {
        Self {
            tokens,
            delegated,
            use_typed_id: cfg.use_typed_id,
        }
    }

    /// Resolve a personal access token.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the token does not resolve
    /// - `Collaborator` on store faults
    pub async fn resolve_token(&self, token_id: &str) -> Result<ResolvedAccessToken, DomainError> {
        self.tokens
            .resolve(token_id)
            .await?
            .ok_or(DomainError::NotFound)
    }

    /// Resolve a delegated login with the configured typed-id policy.
    ///
    /// # Errors
    ///
    /// - `LoginRejected` if no principal can be derived
    /// - `Collaborator` on registry faults
    pub async fn resolve_delegated(
        &self,
        client_name: Option<&str>,
        profile: &ExternalProfile,
    ) -> Result<DelegatedAuthentication, DomainError> {
        self.delegated
            .resolve(client_name, profile, self.use_typed_id)
            .await
    }
}
