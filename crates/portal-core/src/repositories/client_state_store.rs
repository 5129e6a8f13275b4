//! Client state store trait (port)
//!
//! Small per-client key/value state that must survive reloads: the doctor
//! auth flag and the sidebar-open preferences. Browser cookies, a JSON file
//! and an in-memory map all implement it.

use async_trait::async_trait;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientStateStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError>;
    async fn remove(&self, key: &str) -> Result<(), DomainError>;
}
