// ============================================================================
// Portal Infrastructure - JSON File State Store
// File: crates/portal-infrastructure/src/storage/file.rs
// ============================================================================
//! Client state persisted as one JSON object on disk

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::debug;

use portal_core::error::DomainError;
use portal_core::repositories::ClientStateStore;

/// Survives process restarts. Writes go through a temp file and a rename.
pub struct FileStateStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>, DomainError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.is_empty() => Ok(BTreeMap::new()),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                DomainError::StorageUnavailable(format!("{}: {}", self.path.display(), e))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(DomainError::StorageUnavailable(format!(
                "{}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    async fn write_all(&self, values: &BTreeMap<String, String>) -> Result<(), DomainError> {
        let io_err = |e: std::io::Error| {
            DomainError::StorageUnavailable(format!("{}: {}", self.path.display(), e))
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
            }
        }

        let bytes = serde_json::to_vec_pretty(values)
            .map_err(|e| DomainError::StorageUnavailable(e.to_string()))?;
        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, bytes).await.map_err(io_err)?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(io_err)?;

        debug!(path = %self.path.display(), entries = values.len(), "Client state written");
        Ok(())
    }
}

#[async_trait]
impl ClientStateStore for FileStateStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let _guard = self.lock.lock().await;
        Ok(self.read_all().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let _guard = self.lock.lock().await;
        let mut values = self.read_all().await?;
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values).await
    }

    async fn remove(&self, key: &str) -> Result<(), DomainError> {
        let _guard = self.lock.lock().await;
        let mut values = self.read_all().await?;
        if values.remove(key).is_some() {
            self.write_all(&values).await?;
        }
        Ok(())
    }
}
