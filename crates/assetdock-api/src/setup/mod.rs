//! Application initialization: storage, repository, routes, server.

pub mod routes;
pub mod server;
pub mod storage;

use std::sync::Arc;

use anyhow::Result;
use assetdock_core::Config;
use axum::Router;

use crate::repository::{AssetRepository, InMemoryAssetRepository};
use crate::state::AppState;

/// Build the application state and router from configuration.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, Router)> {
    let store = storage::create_store(&config).await?;
    let assets: Arc<dyn AssetRepository> = Arc::new(InMemoryAssetRepository::new());

    let state = Arc::new(AppState::new(config.clone(), store, assets));
    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
