//! Public API trait for the identity resolver.
//!
//! This trait defines the interface that the authentication pipeline uses
//! once a credential has been verified upstream. The resolver module
//! implements it on top of the injected collaborators.

use async_trait::async_trait;

use crate::error::IdentityResolverError;
use crate::models::{DelegatedAuthentication, ExternalProfile, ResolvedAccessToken};

/// Public API trait for the identity resolver.
///
/// ```ignore
/// let token = resolver.resolve_token(token_id).await?;
/// let auth = resolver.resolve_delegated(Some(client_name), &profile).await?;
/// ```
///
/// Calls are independent of each other: repeating a call with the same
/// inputs against unchanged collaborators yields the same outcome.
#[async_trait]
pub trait IdentityResolverClient: Send + Sync {
    /// Resolve a personal access token id to its owner's public identifier
    /// and granted scopes.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the token is unknown, inactive, or its owner has no identifier
    /// - `Collaborator` if a backing store failed
    async fn resolve_token(
        &self,
        token_id: &str,
    ) -> Result<ResolvedAccessToken, IdentityResolverError>;

    /// Resolve a delegated-login profile to a principal, using the
    /// configured typed-id policy.
    ///
    /// # Arguments
    ///
    /// * `client_name` - Name of the delegated client that authenticated the user
    /// * `profile` - Profile released by that client
    ///
    /// # Errors
    ///
    /// - `LoginRejected` if the client name is missing or no identifier can be derived
    /// - `Collaborator` if the institution registry failed
    async fn resolve_delegated(
        &self,
        client_name: Option<&str>,
        profile: &ExternalProfile,
    ) -> Result<DelegatedAuthentication, IdentityResolverError>;
}
