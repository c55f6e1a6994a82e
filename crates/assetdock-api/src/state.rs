use assetdock_core::Config;
use assetdock_storage::AssetStore;
use std::sync::Arc;

use crate::repository::AssetRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Owns the uploaded bytes; handlers never touch the filesystem directly.
    pub store: Arc<dyn AssetStore>,
    /// Persistence collaborator for asset records.
    pub assets: Arc<dyn AssetRepository>,
}

impl AppState {
    pub fn new(
        config: Config,
        store: Arc<dyn AssetStore>,
        assets: Arc<dyn AssetRepository>,
    ) -> Self {
        AppState {
            config,
            store,
            assets,
        }
    }
}
