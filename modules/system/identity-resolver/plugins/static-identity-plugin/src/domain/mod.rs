//! Domain layer for the static identity plugin.

mod client;
pub mod service;

pub use service::Service;
