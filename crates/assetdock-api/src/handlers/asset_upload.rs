use std::sync::Arc;

use assetdock_core::constants::STORAGE_ROOT;
use assetdock_core::models::{Asset, AssetResponse};
use assetdock_core::AppError;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::error::{ErrorBody, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::extract_multipart_file;

/// Upload asset handler
///
/// Converts one accepted upload into a persisted asset record:
/// extract the file from the multipart form, hand the bytes to the storage
/// adapter (which picks the generated filename), build the record with
/// `file_path` under the fixed storage root, persist it, respond 201.
///
/// The client-supplied filename is kept as metadata only; it never
/// contributes to where the bytes land.
#[utoipa::path(
    post,
    path = "/api/assets/upload",
    tag = "assets",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Asset created", body = AssetResponse),
        (status = 400, description = "No file uploaded", body = ErrorBody),
        (status = 500, description = "Failed to upload asset", body = ErrorBody)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_asset"))]
pub async fn upload_asset(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<AssetResponse>), HttpAppError> {
    let multipart = multipart.map_err(|e| {
        tracing::debug!(error = %e, "Request body is not multipart");
        HttpAppError(AppError::NoFileProvided)
    })?;

    let (data, original_filename, content_type) = extract_multipart_file(multipart).await?;

    let stored = state
        .store
        .store(&original_filename, &content_type, data)
        .await?;

    let asset = Asset {
        id: Uuid::new_v4(),
        name: original_filename,
        file_path: format!("{}/{}", STORAGE_ROOT, stored.filename),
        content_type,
        size: stored.size as i64,
        uploaded_at: Utc::now(),
    };

    tracing::info!(
        asset_id = %asset.id,
        name = %asset.name,
        file_path = %asset.file_path,
        size_bytes = asset.size,
        "Asset stored"
    );

    let asset = match state.assets.create(asset).await {
        Ok(asset) => asset,
        Err(e) => {
            // The bytes are orphaned if the record never lands; remove them.
            if let Err(cleanup_err) = state.store.delete(&stored.filename).await {
                tracing::warn!(
                    error = %cleanup_err,
                    filename = %stored.filename,
                    "Failed to clean up stored file after persistence error"
                );
            }
            return Err(e.into());
        }
    };

    Ok((StatusCode::CREATED, Json(asset.into())))
}
