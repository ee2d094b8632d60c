//! Delegated-login profile resolution.

use std::sync::Arc;

use identity_resolver_sdk::{
    DelegatedAuthentication, ExternalProfile, InstitutionLogin, InstitutionRegistry,
    LoginRejection, Principal,
};
use tracing::debug;

use super::error::DomainError;

/// Resolves a profile released by a delegated client to a principal.
///
/// Institution clients resolve to their client name, which doubles as the
/// institution id for the institution login flow. All other clients
/// resolve to the profile's typed or raw identifier.
#[derive(Clone)]
pub struct DelegatedIdentityResolver {
    institutions: Arc<dyn InstitutionRegistry>,
}

impl DelegatedIdentityResolver {
    #[must_use]
    pub fn new(institutions: Arc<dyn InstitutionRegistry>) -> Self {
        Self { institutions }
    }

    /// Resolve `profile` as authenticated by `client_name`.
    ///
    /// # Errors
    ///
    /// - `LoginRejected(MissingClientName)` if `client_name` is absent or blank
    /// - `LoginRejected(MissingIdentifier)` if the derived id is blank
    /// - `Collaborator` if the institution registry fails
    #[tracing::instrument(
        skip_all,
        fields(client_name = client_name.unwrap_or_default(), use_typed_id = use_typed_id)
    )]
    pub async fn resolve(
        &self,
        client_name: Option<&str>,
        profile: &ExternalProfile,
        use_typed_id: bool,
    ) -> Result<DelegatedAuthentication, DomainError> {
        let Some(client_name) = client_name.filter(|name| !name.trim().is_empty()) else {
            debug!("delegated login without client name");
            return Err(LoginRejection::MissingClientName.into());
        };

        let is_institution = self.institutions.is_institution_client(client_name).await?;
        let id = if is_institution {
            client_name
        } else {
            profile.identifier(use_typed_id)
        };

        let Some(principal) = Principal::new(id, profile.attributes.clone()) else {
            debug!(is_institution, "delegated login without usable identifier");
            return Err(LoginRejection::MissingIdentifier.into());
        };

        let institution = is_institution.then(|| InstitutionLogin {
            institution_id: client_name.to_owned(),
            delegated_attributes: profile.attributes.clone(),
        });

        debug!(is_institution, "delegated login resolved");
        Ok(DelegatedAuthentication {
            principal,
            client_name: client_name.to_owned(),
            typed_id_used: use_typed_id,
            institution,
        })
    }
}
