//! Domain layer for the identity resolver.

pub mod delegated_resolver;
pub mod error;
pub mod local_client;
pub mod scopes;
pub mod service;
pub mod token_resolver;

pub use delegated_resolver::DelegatedIdentityResolver;
pub use error::DomainError;
pub use local_client::IdentityResolverLocalClient;
pub use service::Service;
pub use token_resolver::TokenPrincipalResolver;
