//! In-memory client state

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

use portal_core::error::DomainError;
use portal_core::repositories::ClientStateStore;

/// Process-local store. Cheap to clone, clones share the same map.
#[derive(Clone, Default)]
pub struct MemoryStateStore {
    values: Arc<DashMap<String, String>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[async_trait]
impl ClientStateStore for MemoryStateStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.values.get(key).map(|entry| entry.value().clone()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), DomainError> {
        self.values.remove(key);
        Ok(())
    }
}
