use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use identity_resolver_sdk::{
    CollaboratorError, InstitutionRegistry, OwnerRef, Token, TokenStore, UserIdentifier,
    UserIdentifierStore,
};

/// In-memory collaborators with per-store call counters and an optional
/// injected failure.
#[derive(Default)]
pub struct MockCollaborators {
    tokens: HashMap<String, Token>,
    guids: HashMap<OwnerRef, String>,
    institutions: HashSet<String>,
    failure: Option<CollaboratorError>,
    pub token_lookups: AtomicUsize,
    pub identifier_lookups: AtomicUsize,
    pub registry_lookups: AtomicUsize,
}

impl MockCollaborators {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_token(
        mut self,
        token_id: &str,
        owner: &str,
        scopes: Option<&str>,
        active: bool,
    ) -> Self {
        self.tokens.insert(
            token_id.to_owned(),
            Token {
                token_id: token_id.to_owned(),
                owner: OwnerRef::new(owner),
                scopes: scopes.map(str::to_owned),
                active,
            },
        );
        self
    }

    #[must_use]
    pub fn with_guid(mut self, owner: &str, guid: &str) -> Self {
        self.guids.insert(OwnerRef::new(owner), guid.to_owned());
        self
    }

    #[must_use]
    pub fn with_institution(mut self, client_name: &str) -> Self {
        self.institutions.insert(client_name.to_owned());
        self
    }

    #[must_use]
    pub fn failing(mut self, failure: CollaboratorError) -> Self {
        self.failure = Some(failure);
        self
    }

    #[must_use]
    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    fn check_failure(&self) -> Result<(), CollaboratorError> {
        self.failure.clone().map_or(Ok(()), Err)
    }
}

#[async_trait]
impl TokenStore for MockCollaborators {
    async fn find_active_token_by_id(
        &self,
        token_id: &str,
    ) -> Result<Option<Token>, CollaboratorError> {
        self.token_lookups.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        Ok(self.tokens.get(token_id).cloned())
    }
}

#[async_trait]
impl UserIdentifierStore for MockCollaborators {
    async fn find_identifier_for_owner(
        &self,
        owner: &OwnerRef,
    ) -> Result<Option<UserIdentifier>, CollaboratorError> {
        self.identifier_lookups.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        Ok(self.guids.get(owner).map(|guid| UserIdentifier {
            owner: owner.clone(),
            guid: guid.clone(),
        }))
    }
}

#[async_trait]
impl InstitutionRegistry for MockCollaborators {
    async fn is_institution_client(&self, client_name: &str) -> Result<bool, CollaboratorError> {
        self.registry_lookups.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        Ok(self.institutions.contains(client_name))
    }
}

#[must_use]
pub fn count(counter: &AtomicUsize) -> usize {
    counter.load(Ordering::SeqCst)
}
