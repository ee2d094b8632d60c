#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Static Identity Plugin
//!
//! Implements the identity resolver collaborators (`TokenStore`,
//! `UserIdentifierStore`, `InstitutionRegistry`) from configuration, for
//! development and end-to-end tests without a database.
//!
//! ## Configuration
//!
//! ```yaml
//! modules:
//!   static_identity_plugin:
//!     config:
//!       tokens:
//!         - token_id: "pat-dev"
//!           owner: "1"
//!           scopes: "osf.full_read osf.full_write"
//!         - token_id: "pat-revoked"
//!           owner: "1"
//!           active: false
//!       identifiers:
//!         - owner: "1"
//!           guid: "abc12"
//!       institutions: ["okstate"]
//! ```

pub mod config;
pub mod domain;
pub mod module;

pub use module::StaticIdentityPlugin;
