//! Domain errors for the identity resolver.

use identity_resolver_sdk::{CollaboratorError, IdentityResolverError, LoginRejection};

/// Internal domain errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("credential not found")]
    NotFound,

    #[error("login rejected: {0}")]
    LoginRejected(#[from] LoginRejection),

    #[error("collaborator failed: {0}")]
    Collaborator(#[from] CollaboratorError),
}

impl DomainError {
    /// Whether this outcome is an ordinary failed login rather than a fault.
    #[must_use]
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, Self::NotFound | Self::LoginRejected(_))
    }
}

impl From<DomainError> for IdentityResolverError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound => Self::NotFound,
            DomainError::LoginRejected(rejection) => Self::LoginRejected(rejection),
            DomainError::Collaborator(fault) => Self::Collaborator(fault),
        }
    }
}
