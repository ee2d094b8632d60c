//! Identity Resolver SDK
//!
//! This crate provides the public API for the `identity_resolver` module:
//!
//! - [`IdentityResolverClient`] - Public API trait for the authentication pipeline
//! - [`TokenStore`], [`UserIdentifierStore`], [`InstitutionRegistry`] - Collaborator
//!   traits the surrounding system implements
//! - [`Principal`], [`ResolvedAccessToken`], [`DelegatedAuthentication`] - Result models
//! - [`IdentityResolverError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use identity_resolver_sdk::IdentityResolverClient;
//!
//! // Personal access token presented as a bearer credential
//! let token = resolver.resolve_token("pat-123").await?;
//! let guid = token.principal_guid;
//!
//! // Profile released by a delegated identity provider
//! let auth = resolver.resolve_delegated(Some("orcid"), &profile).await?;
//! let principal_id = auth.principal.id();
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod collaborators;
pub mod error;
pub mod models;

// Re-export main types at crate root
pub use api::IdentityResolverClient;
pub use collaborators::{InstitutionRegistry, TokenStore, UserIdentifierStore};
pub use error::{CollaboratorError, IdentityResolverError, LoginRejection};
pub use models::{
    Attributes, DelegatedAuthentication, ExternalProfile, InstitutionLogin, OwnerRef, Principal,
    ResolvedAccessToken, TYPED_ID_SEPARATOR, Token, UserIdentifier,
};
