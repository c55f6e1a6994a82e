use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A stored file plus its metadata record.
///
/// Created once the bytes have been written to storage and immutable
/// thereafter. `file_path` always points inside the storage root and never
/// contains the client-supplied filename.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: Uuid,
    /// Original client-provided filename, metadata only.
    pub name: String,
    /// Relative location of the stored bytes, `uploads/{generated-filename}`.
    pub file_path: String,
    /// Declared MIME type of the upload; not verified against the bytes.
    #[serde(rename = "type")]
    pub content_type: String,
    /// Byte length of the stored file.
    pub size: i64,
    pub uploaded_at: DateTime<Utc>,
}

/// Wire representation of a freshly created asset.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AssetResponse {
    pub name: String,
    #[serde(rename = "filePath")]
    pub file_path: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub size: i64,
}

impl From<Asset> for AssetResponse {
    fn from(asset: Asset) -> Self {
        AssetResponse {
            name: asset.name,
            file_path: asset.file_path,
            content_type: asset.content_type,
            size: asset.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_asset() -> Asset {
        Asset {
            id: Uuid::new_v4(),
            name: "a.txt".to_string(),
            file_path: "uploads/0a1b2c.txt".to_string(),
            content_type: "text/plain".to_string(),
            size: 10,
            uploaded_at: Utc::now(),
        }
    }

    #[test]
    fn response_from_asset_carries_metadata() {
        let asset = test_asset();
        let response = AssetResponse::from(asset.clone());
        assert_eq!(response.name, asset.name);
        assert_eq!(response.file_path, asset.file_path);
        assert_eq!(response.content_type, asset.content_type);
        assert_eq!(response.size, asset.size);
    }

    #[test]
    fn response_serializes_wire_field_names() {
        let value = serde_json::to_value(AssetResponse::from(test_asset())).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        for key in ["name", "filePath", "type", "size"] {
            assert!(obj.contains_key(key), "missing field {}", key);
        }
        assert_eq!(obj["type"], "text/plain");
        assert_eq!(obj["size"], 10);
    }

    #[test]
    fn asset_serializes_camel_case() {
        let value = serde_json::to_value(test_asset()).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("filePath"));
        assert!(obj.contains_key("uploadedAt"));
        assert!(obj.contains_key("type"));
        assert!(!obj.contains_key("content_type"));
    }
}
