//! In-process doubles shared by the service tests

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::DomainError;
use crate::repositories::ClientStateStore;

/// Map-backed store that records every write.
#[derive(Default)]
pub struct RecordingStore {
    values: Mutex<HashMap<String, String>>,
    pub writes: Mutex<Vec<(String, Option<String>)>>,
}

impl RecordingStore {
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.values.lock().unwrap().insert(key.to_string(), value.to_string());
        store
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    pub fn last_write(&self) -> Option<(String, Option<String>)> {
        self.writes.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ClientStateStore for RecordingStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.value(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        self.values.lock().unwrap().insert(key.to_string(), value.to_string());
        self.writes.lock().unwrap().push((key.to_string(), Some(value.to_string())));
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), DomainError> {
        self.values.lock().unwrap().remove(key);
        self.writes.lock().unwrap().push((key.to_string(), None));
        Ok(())
    }
}
