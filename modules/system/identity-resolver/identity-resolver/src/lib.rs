//! Identity Resolver Module
//!
//! Maps identities that were already verified upstream onto internal principals:
//!
//! - personal access tokens resolve to the owner's public guid and scope set
//!   ([`domain::TokenPrincipalResolver`])
//! - delegated-login profiles resolve to a principal id, with institution
//!   clients keyed by client name ([`domain::DelegatedIdentityResolver`])
//!
//! Collaborators (token store, identifier store, institution registry) are
//! injected explicitly through [`module::Collaborators`]. The module hands
//! back an `IdentityResolverClient` for the authentication pipeline.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;
pub mod module;

#[cfg(test)]
mod test_support;
