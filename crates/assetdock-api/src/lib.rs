//! Assetdock API Library
//!
//! HTTP intake service for the asset store: route setup, the upload
//! handler, and application state. The binary in `main.rs` is a thin
//! wrapper over `setup::initialize_app` + `setup::server::start_server`.

pub mod api_doc;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod repository;
pub mod setup;
pub mod state;
pub mod telemetry;
pub mod utils;

pub use error::{ErrorBody, HttpAppError};
pub use repository::{AssetRepository, InMemoryAssetRepository, RepositoryError};
pub use state::AppState;
