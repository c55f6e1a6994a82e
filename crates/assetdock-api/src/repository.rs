//! Asset metadata persistence.
//!
//! The persistence collaborator is a seam, not an implementation detail of
//! the intake handler: `AssetRepository` is trait-based so handlers can be
//! exercised against an in-memory store, and a database-backed
//! implementation can slot in behind the same interface.

use assetdock_core::models::Asset;
use async_trait::async_trait;
use std::sync::Mutex;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Duplicate asset id: {0}")]
    DuplicateId(Uuid),

    #[error("Repository unavailable: {0}")]
    Unavailable(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[async_trait]
pub trait AssetRepository: Send + Sync {
    /// Persist a new asset record and return the persisted record.
    async fn create(&self, asset: Asset) -> RepositoryResult<Asset>;

    /// All persisted assets, newest first.
    async fn list(&self) -> RepositoryResult<Vec<Asset>>;
}

/// In-memory asset repository.
#[derive(Default)]
pub struct InMemoryAssetRepository {
    assets: Mutex<Vec<Asset>>,
}

impl InMemoryAssetRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AssetRepository for InMemoryAssetRepository {
    async fn create(&self, asset: Asset) -> RepositoryResult<Asset> {
        let mut assets = self.assets.lock().unwrap();
        if assets.iter().any(|existing| existing.id == asset.id) {
            return Err(RepositoryError::DuplicateId(asset.id));
        }
        assets.push(asset.clone());
        Ok(asset)
    }

    async fn list(&self) -> RepositoryResult<Vec<Asset>> {
        let mut assets = self.assets.lock().unwrap().clone();
        assets.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        Ok(assets)
    }
}
