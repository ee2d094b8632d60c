//! Collaborator implementations for the static identity plugin.
//!
//! Implements the identity resolver collaborator traits using the domain service.

use async_trait::async_trait;
use identity_resolver_sdk::{
    CollaboratorError, InstitutionRegistry, OwnerRef, Token, TokenStore, UserIdentifier,
    UserIdentifierStore,
};

use super::service::Service;

#[async_trait]
impl TokenStore for Service {
    async fn find_active_token_by_id(
        &self,
        token_id: &str,
    ) -> Result<Option<Token>, CollaboratorError> {
        Ok(self.token(token_id))
    }
}

#[async_trait]
impl UserIdentifierStore for Service {
    async fn find_identifier_for_owner(
        &self,
        owner: &OwnerRef,
    ) -> Result<Option<UserIdentifier>, CollaboratorError> {
        Ok(self.identifier(owner))
    }
}

#[async_trait]
impl InstitutionRegistry for Service {
    async fn is_institution_client(&self, client_name: &str) -> Result<bool, CollaboratorError> {
        Ok(self.is_institution(client_name))
    }
}
