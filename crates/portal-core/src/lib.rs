//! # Portal Core
//! 
//! Domain entities, services, and port traits for the care portal shell.

pub mod domain;
pub mod navigation;
pub mod services;
pub mod repositories;
pub mod error;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
