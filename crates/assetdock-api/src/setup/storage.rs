//! Storage backend wiring.

use anyhow::Context;
use assetdock_core::Config;
use assetdock_storage::AssetStore;
use std::sync::Arc;

/// Create the configured storage backend.
pub async fn create_store(config: &Config) -> Result<Arc<dyn AssetStore>, anyhow::Error> {
    assetdock_storage::create_store(&config.storage_backend, &config.storage_root)
        .await
        .with_context(|| {
            format!(
                "Failed to initialize '{}' storage at '{}'",
                config.storage_backend, config.storage_root
            )
        })
}
