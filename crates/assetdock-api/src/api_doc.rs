//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error::ErrorBody;
use crate::handlers;
use assetdock_core::models::{Asset, AssetResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Assetdock API",
        version = "0.1.0",
        description = "Minimal digital-asset-management intake API: upload a file as multipart form data, get back its asset record. Files are stored under the uploads/ root with generated names."
    ),
    paths(
        handlers::asset_upload::upload_asset,
        handlers::asset_list::list_assets,
        handlers::health::health,
    ),
    components(schemas(Asset, AssetResponse, ErrorBody)),
    tags(
        (name = "assets", description = "Asset intake and listing"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
