//! HTTP error response conversion
//!
//! Converts `AppError` into the wire error shape. The body is always
//! `{"message": ...}` with a static client message; the underlying cause is
//! logged here and never serialized.

use assetdock_core::{AppError, LogLevel};
use assetdock_storage::StorageError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::repository::RepositoryError;

/// Wire shape of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub message: String,
}

/// Wrapper type for AppError to implement IntoResponse.
/// Needed because of the orphan rule: IntoResponse is axum's trait and
/// AppError lives in assetdock-core.
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

/// Log an error at the severity its metadata asks for.
fn log_error(error: &AppError) {
    let code = error.error_code();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, code = code, "Request rejected");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, code = code, "Request failed");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        let body = Json(ErrorBody {
            message: app_error.client_message().to_string(),
        });

        (status, body).into_response()
    }
}

// Convert domain errors to HttpAppError (impls stay on the local wrapper).

impl From<StorageError> for HttpAppError {
    fn from(err: StorageError) -> Self {
        HttpAppError(AppError::Storage(err.to_string()))
    }
}

impl From<RepositoryError> for HttpAppError {
    fn from(err: RepositoryError) -> Self {
        HttpAppError(AppError::Repository(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_error_maps_to_storage_variant() {
        let storage_err = StorageError::WriteFailed("disk full".to_string());
        let HttpAppError(app_err) = storage_err.into();
        match app_err {
            AppError::Storage(msg) => assert!(msg.contains("disk full")),
            _ => panic!("Expected Storage variant"),
        }
    }

    #[test]
    fn repository_error_maps_to_repository_variant() {
        let repo_err = RepositoryError::Unavailable("store offline".to_string());
        let HttpAppError(app_err) = repo_err.into();
        match app_err {
            AppError::Repository(msg) => assert!(msg.contains("store offline")),
            _ => panic!("Expected Repository variant"),
        }
    }

    #[test]
    fn io_error_maps_through_storage() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let HttpAppError(app_err) = StorageError::from(io_err).into();
        match app_err {
            AppError::Storage(msg) => assert!(msg.contains("denied")),
            _ => panic!("Expected Storage variant"),
        }
    }

    #[tokio::test]
    async fn response_body_is_message_only() {
        let response = HttpAppError(AppError::NoFileProvided).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value, serde_json::json!({ "message": "No file uploaded" }));
    }

    #[tokio::test]
    async fn server_error_body_is_generic() {
        let response =
            HttpAppError(AppError::Storage("secret detail".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value, serde_json::json!({ "message": "Failed to upload asset" }));
    }
}
