//! Personal access token resolution.

use std::sync::Arc;

use identity_resolver_sdk::{
    CollaboratorError, ResolvedAccessToken, TokenStore, UserIdentifierStore,
};
use tracing::debug;

use super::scopes::parse_scopes;

/// Resolves a personal access token id to its owner's guid and scopes.
///
/// A token resolves only when it exists, is active, and its owner has a
/// public identifier. Every other case is `None`, never a partial result.
#[derive(Clone)]
pub struct TokenPrincipalResolver {
    tokens: Arc<dyn TokenStore>,
    identifiers: Arc<dyn UserIdentifierStore>,
}

impl TokenPrincipalResolver {
    #[must_use]
    pub fn new(tokens: Arc<dyn TokenStore>, identifiers: Arc<dyn UserIdentifierStore>) -> Self {
        Self {
            tokens,
            identifiers,
        }
    }

    /// Resolve `token_id`; `Ok(None)` means the token is not honored.
    ///
    /// # Errors
    ///
    /// Propagates collaborator faults unchanged.
    #[tracing::instrument(skip_all)]
    pub async fn resolve(
        &self,
        token_id: &str,
    ) -> Result<Option<ResolvedAccessToken>, CollaboratorError> {
        let Some(token) = self.tokens.find_active_token_by_id(token_id).await? else {
            debug!(reason = "unknown_token", "personal access token not resolved");
            return Ok(None);
        };
        if !token.active {
            debug!(reason = "inactive_token", "personal access token not resolved");
            return Ok(None);
        }

        let scopes = parse_scopes(token.scopes.as_deref());

        let Some(identifier) = self
            .identifiers
            .find_identifier_for_owner(&token.owner)
            .await?
        else {
            debug!(
                reason = "owner_without_guid",
                "personal access token not resolved"
            );
            return Ok(None);
        };

        debug!(scope_count = scopes.len(), "personal access token resolved");
        Ok(Some(ResolvedAccessToken {
            token_id: token.token_id,
            principal_guid: identifier.guid,
            scopes,
        }))
    }
}
