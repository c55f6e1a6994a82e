//! Multipart extraction for the intake endpoint.

use assetdock_core::AppError;
use axum::extract::Multipart;

/// Extract file bytes, original filename, and declared content type from a
/// multipart form.
///
/// Exactly one field named `file` is consumed; the first one wins. A request
/// with no such field, or a body that cannot be read as multipart at all, is
/// `NoFileProvided` — from the caller's side no file arrived.
pub async fn extract_multipart_file(
    mut multipart: Multipart,
) -> Result<(Vec<u8>, String, String), AppError> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Err(AppError::NoFileProvided),
            Err(e) => {
                tracing::debug!(error = %e, "Unreadable multipart body");
                return Err(AppError::NoFileProvided);
            }
        };

        if field.name() != Some("file") {
            continue;
        }

        let original_filename = field
            .file_name()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        let content_type = field
            .content_type()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        let data = match field.bytes().await {
            Ok(data) => data,
            Err(e) => {
                tracing::debug!(error = %e, "Failed to read file field");
                return Err(AppError::NoFileProvided);
            }
        };

        return Ok((data.to_vec(), original_filename, content_type));
    }
}
