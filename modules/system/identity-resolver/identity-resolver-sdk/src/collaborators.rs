//! Collaborator traits implemented by the surrounding system.
//!
//! The resolvers only read through these interfaces. Implementations own
//! their concurrency safety; the resolvers await them without timeouts or
//! retries.

use async_trait::async_trait;

use crate::error::CollaboratorError;
use crate::models::{OwnerRef, Token, UserIdentifier};

/// Read access to personal access token records.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Look up a token record by its id.
    ///
    /// Implementations may return inactive records; the resolver checks
    /// the `active` flag itself.
    ///
    /// # Errors
    ///
    /// Returns a `CollaboratorError` when the backing store fails.
    async fn find_active_token_by_id(
        &self,
        token_id: &str,
    ) -> Result<Option<Token>, CollaboratorError>;
}

/// Read access to the owner-to-public-identifier mapping.
#[async_trait]
pub trait UserIdentifierStore: Send + Sync {
    /// Find the stable public identifier of a user.
    ///
    /// # Errors
    ///
    /// Returns a `CollaboratorError` when the backing store fails.
    async fn find_identifier_for_owner(
        &self,
        owner: &OwnerRef,
    ) -> Result<Option<UserIdentifier>, CollaboratorError>;
}

/// Registry of delegated clients that feed the institution login flow.
#[async_trait]
pub trait InstitutionRegistry: Send + Sync {
    /// Whether `client_name` is registered as an institution delegated-login client.
    ///
    /// # Errors
    ///
    /// Returns a `CollaboratorError` when the registry cannot be queried.
    async fn is_institution_client(&self, client_name: &str) -> Result<bool, CollaboratorError>;
}
