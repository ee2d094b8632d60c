//! Error types for the identity resolver module.

use thiserror::Error;

/// Infrastructure fault raised by a collaborator (token store, identifier
/// store, institution registry).
///
/// The resolvers never catch these; they surface as system errors rather
/// than login failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    /// The backing service cannot be reached right now.
    #[error("collaborator unavailable: {0}")]
    Unavailable(String),

    /// The backing service failed unexpectedly.
    #[error("collaborator internal error: {0}")]
    Internal(String),
}

impl CollaboratorError {
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

/// Why a delegated login was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginRejection {
    /// The credential did not name the delegated client it came from.
    #[error("no client name found for this user profile")]
    MissingClientName,

    /// Neither the client nor the profile yielded a usable identifier.
    #[error("no identifier found for this user profile")]
    MissingIdentifier,
}

/// Errors that can occur when using the identity resolver API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityResolverError {
    /// The token is unknown, inactive, or belongs to an unprovisioned account.
    #[error("credential not found")]
    NotFound,

    /// The delegated login cannot be mapped to a principal.
    #[error("login rejected: {0}")]
    LoginRejected(LoginRejection),

    /// A collaborator failed; this is a system error, not a login failure.
    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),
}

impl IdentityResolverError {
    /// Whether the caller should answer "authentication failed" rather
    /// than report a system error.
    #[must_use]
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, Self::NotFound | Self::LoginRejected(_))
    }
}

impl From<LoginRejection> for IdentityResolverError {
    fn from(rejection: LoginRejection) -> Self {
        Self::LoginRejected(rejection)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn authentication_failures_are_classified() {
        assert!(IdentityResolverError::NotFound.is_authentication_failure());
        assert!(
            IdentityResolverError::from(LoginRejection::MissingClientName)
                .is_authentication_failure()
        );
        assert!(
            !IdentityResolverError::from(CollaboratorError::unavailable("db down"))
                .is_authentication_failure()
        );
    }

    #[test]
    fn rejection_reason_is_human_readable() {
        let err = IdentityResolverError::from(LoginRejection::MissingIdentifier);
        assert_eq!(
            err.to_string(),
            "login rejected: no identifier found for this user profile"
        );

        let err = IdentityResolverError::from(LoginRejection::MissingClientName);
        assert_eq!(
            err.to_string(),
            "login rejected: no client name found for this user profile"
        );
    }

    #[test]
    fn collaborator_error_is_transparent() {
        let err = IdentityResolverError::from(CollaboratorError::internal("boom"));
        assert_eq!(err.to_string(), "collaborator internal error: boom");
    }
}
