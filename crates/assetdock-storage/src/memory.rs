//! In-memory storage backend.
//!
//! Holds files in a map instead of on disk. Used by tests and by the
//! `memory` backend for ephemeral runs where nothing should persist.

use crate::keys;
use crate::traits::{AssetStore, StorageError, StorageResult, StoredFile};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct MemoryStorage {
    files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of files currently held (test assertions).
    pub fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }

    /// Get file data by generated filename (test assertions).
    pub fn get_file(&self, filename: &str) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(filename).cloned()
    }
}

#[async_trait]
impl AssetStore for MemoryStorage {
    async fn store(
        &self,
        original_filename: &str,
        _content_type: &str,
        data: Vec<u8>,
    ) -> StorageResult<StoredFile> {
        let filename = keys::generate_filename(original_filename);
        let size = data.len() as u64;
        self.files.lock().unwrap().insert(filename.clone(), data);
        Ok(StoredFile { filename, size })
    }

    async fn read(&self, filename: &str) -> StorageResult<Vec<u8>> {
        self.files
            .lock()
            .unwrap()
            .get(filename)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(filename.to_string()))
    }

    async fn delete(&self, filename: &str) -> StorageResult<()> {
        self.files.lock().unwrap().remove(filename);
        Ok(())
    }

    async fn exists(&self, filename: &str) -> StorageResult<bool> {
        Ok(self.files.lock().unwrap().contains_key(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn store_and_read_round_trip() {
        let storage = MemoryStorage::new();
        let stored = storage
            .store("a.txt", "text/plain", b"hello".to_vec())
            .await
            .unwrap();
        assert_eq!(stored.size, 5);
        assert_eq!(storage.read(&stored.filename).await.unwrap(), b"hello");
        assert_eq!(storage.file_count(), 1);
    }

    #[tokio::test]
    async fn generated_names_are_unique() {
        let storage = MemoryStorage::new();
        let a = storage.store("a.txt", "text/plain", b"x".to_vec()).await.unwrap();
        let b = storage.store("a.txt", "text/plain", b"x".to_vec()).await.unwrap();
        assert_ne!(a.filename, b.filename);
        assert_eq!(storage.file_count(), 2);
    }

    #[tokio::test]
    async fn delete_removes_file() {
        let storage = MemoryStorage::new();
        let stored = storage.store("a.txt", "text/plain", b"x".to_vec()).await.unwrap();
        storage.delete(&stored.filename).await.unwrap();
        assert!(!storage.exists(&stored.filename).await.unwrap());
        assert!(matches!(
            storage.read(&stored.filename).await.unwrap_err(),
            StorageError::NotFound(_)
        ));
    }
}
