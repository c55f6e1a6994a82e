//! Storage backend factory.

use crate::local::LocalStorage;
use crate::memory::MemoryStorage;
use crate::traits::{AssetStore, StorageError, StorageResult};
use std::sync::Arc;

/// Create a storage backend by name.
///
/// `backend` is `"local"` (bytes under `root`) or `"memory"` (ephemeral).
pub async fn create_store(backend: &str, root: &str) -> StorageResult<Arc<dyn AssetStore>> {
    match backend {
        "local" => {
            let storage = LocalStorage::new(root).await?;
            tracing::info!(root = %root, "Using local filesystem storage");
            Ok(Arc::new(storage))
        }
        "memory" => {
            tracing::info!("Using in-memory storage; files will not survive restart");
            Ok(Arc::new(MemoryStorage::new()))
        }
        other => Err(StorageError::Config(format!(
            "Unknown storage backend '{}'",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn creates_local_backend() {
        let dir = TempDir::new().unwrap();
        let store = create_store("local", dir.path().to_str().unwrap())
            .await
            .unwrap();
        let stored = store.store("a.txt", "text/plain", b"x".to_vec()).await.unwrap();
        assert!(dir.path().join(&stored.filename).exists());
    }

    #[tokio::test]
    async fn creates_memory_backend() {
        let store = create_store("memory", "ignored").await.unwrap();
        let stored = store.store("a.txt", "text/plain", b"x".to_vec()).await.unwrap();
        assert!(store.exists(&stored.filename).await.unwrap());
    }

    #[tokio::test]
    async fn unknown_backend_is_config_error() {
        let err = create_store("s3", "root").await.err().unwrap();
        assert!(matches!(err, StorageError::Config(_)));
    }
}
