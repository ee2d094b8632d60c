//! Local (in-process) client for the identity resolver.

use std::sync::Arc;

use async_trait::async_trait;
use identity_resolver_sdk::{
    DelegatedAuthentication, ExternalProfile, IdentityResolverClient, IdentityResolverError,
    ResolvedAccessToken,
};

use super::{DomainError, Service};

/// Local client wrapping the service.
///
/// Returned by [`crate::module::init`] for the authentication pipeline.
pub struct IdentityResolverLocalClient {
    svc: Arc<Service>,
}

impl IdentityResolverLocalClient {
    #[must_use]
    pub fn new(svc: Arc<Service>) -> Self {
        Self { svc }
    }
}

fn log_and_convert(op: &str, e: DomainError) -> IdentityResolverError {
    if e.is_authentication_failure() {
        tracing::debug!(operation = op, error = %e, "identity not resolved");
    } else {
        tracing::error!(operation = op, error = ?e, "identity_resolver call failed");
    }
    e.into()
}

#[async_trait]
impl IdentityResolverClient for IdentityResolverLocalClient {
    async fn resolve_token(
        &self,
        token_id: &str,
    ) -> Result<ResolvedAccessToken, IdentityResolverError> {
        self.svc
            .resolve_token(token_id)
            .await
            .map_err(|e| log_and_convert("resolve_token", e))
    }

    async fn resolve_delegated(
        &self,
        client_name: Option<&str>,
        profile: &ExternalProfile,
    ) -> Result<DelegatedAuthentication, IdentityResolverError> {
        self.svc
            .resolve_delegated(client_name, profile)
            .await
            .map_err(|e| log_and_convert("resolve_delegated", e))
    }
}
