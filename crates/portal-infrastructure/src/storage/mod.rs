//! Client-state store adapters

pub mod memory;
pub mod file;

pub use memory::MemoryStateStore;
pub use file::FileStateStore;

use std::sync::Arc;
use tracing::info;

use portal_core::error::DomainError;
use portal_core::repositories::ClientStateStore;
use portal_shared::config::{ClientStateSettings, StateBackend};

/// Process-wide store named by `client_state.backend`.
///
/// `None` for the cookie backend: that store is built per request from the
/// browser's cookies by the HTTP layer.
pub fn build_state_store(
    settings: &ClientStateSettings,
) -> Result<Option<Arc<dyn ClientStateStore>>, DomainError> {
    match settings.backend {
        StateBackend::Cookie => {
            info!("Client state kept in browser cookies");
            Ok(None)
        }
        StateBackend::Memory => {
            info!("Client state kept in process memory");
            Ok(Some(Arc::new(MemoryStateStore::new())))
        }
        StateBackend::File => {
            let path = settings.file_path.as_deref().ok_or_else(|| {
                DomainError::StorageUnavailable("client_state.file_path is required for the file backend".into())
            })?;
            info!(path, "Client state kept in JSON file");
            Ok(Some(Arc::new(FileStateStore::new(path))))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(backend: StateBackend, file_path: Option<&str>) -> ClientStateSettings {
        ClientStateSettings {
            auth_key: "doctor_authenticated".into(),
            cookie_max_age_seconds: 60,
            secure_cookies: false,
            backend,
            file_path: file_path.map(str::to_string),
        }
    }

    #[test]
    fn test_cookie_backend_has_no_shared_store() {
        assert!(build_state_store(&settings(StateBackend::Cookie, None)).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_memory_backend_is_shared() {
        let store = build_state_store(&settings(StateBackend::Memory, None))
            .unwrap()
            .unwrap();
        store.set("sidebar_state_admin", "true").await.unwrap();
        assert_eq!(store.get("sidebar_state_admin").await.unwrap().as_deref(), Some("true"));
    }

    #[tokio::test]
    async fn test_file_backend_writes_to_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let store = build_state_store(&settings(StateBackend::File, path.to_str()))
            .unwrap()
            .unwrap();

        store.set("doctor_authenticated", "true").await.unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_file_backend_requires_path() {
        let err = build_state_store(&settings(StateBackend::File, None)).err().unwrap();
        assert!(matches!(err, DomainError::StorageUnavailable(_)));
    }
}
