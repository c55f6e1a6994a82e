//! Storage abstraction trait
//!
//! Defines the `AssetStore` trait all storage backends implement, so the
//! intake handler can be wired to disk, memory, or anything else without
//! touching filesystem details itself.

use async_trait::async_trait;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Read failed: {0}")]
    ReadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage filename: {0}")]
    InvalidName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Outcome of a successful `store` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Storage-generated filename the bytes live under. Never derived from
    /// the client-supplied name beyond its sanitized extension.
    pub filename: String,
    /// Byte count actually written.
    pub size: u64,
}

/// Storage abstraction trait
///
/// Backends own the bytes; callers only ever see the generated filename and
/// reference files through it.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Write `data` under a freshly generated, storage-unique filename.
    ///
    /// `original_filename` contributes at most a sanitized extension to the
    /// generated name. Returns the generated filename and the byte count
    /// written, which callers must treat as the authoritative size.
    async fn store(
        &self,
        original_filename: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> StorageResult<StoredFile>;

    /// Read a stored file back by its generated filename.
    async fn read(&self, filename: &str) -> StorageResult<Vec<u8>>;

    /// Delete a stored file. Deleting a missing file is not an error.
    async fn delete(&self, filename: &str) -> StorageResult<()>;

    /// Check whether a file exists.
    async fn exists(&self, filename: &str) -> StorageResult<bool>;
}
