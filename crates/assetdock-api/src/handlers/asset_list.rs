use std::sync::Arc;

use assetdock_core::models::Asset;
use axum::{extract::State, Json};

use crate::error::{ErrorBody, HttpAppError};
use crate::state::AppState;

/// List all asset records, newest first.
#[utoipa::path(
    get,
    path = "/api/assets",
    tag = "assets",
    responses(
        (status = 200, description = "All asset records", body = [Asset]),
        (status = 500, description = "Listing failed", body = ErrorBody)
    )
)]
pub async fn list_assets(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Asset>>, HttpAppError> {
    let assets = state.assets.list().await?;
    Ok(Json(assets))
}
