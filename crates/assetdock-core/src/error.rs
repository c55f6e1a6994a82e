//! Error types module
//!
//! All intake failures are unified under the `AppError` enum. Each variant
//! self-describes how it is presented over HTTP: status code, machine-readable
//! code for logs, the client-facing message, and the severity it is logged at.
//! Internal detail is never part of the client message.

/// Log level for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Expected client errors (e.g. a request with no file attached).
    Debug,
    /// Unexpected failures.
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The multipart request carried no usable file field.
    #[error("no file provided in multipart request")]
    NoFileProvided,

    #[error("storage error: {0}")]
    Storage(String),

    #[error("repository error: {0}")]
    Repository(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code to return.
    pub fn http_status_code(&self) -> u16 {
        match self {
            AppError::NoFileProvided => 400,
            AppError::Storage(_) | AppError::Repository(_) | AppError::Internal(_) => 500,
        }
    }

    /// Machine-readable error code, used as a structured log field.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NoFileProvided => "NO_FILE_PROVIDED",
            AppError::Storage(_) => "STORAGE_ERROR",
            AppError::Repository(_) => "REPOSITORY_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Client-facing message. Static for client errors, generic for server
    /// errors; the underlying cause stays in the server logs.
    pub fn client_message(&self) -> &'static str {
        match self {
            AppError::NoFileProvided => "No file uploaded",
            AppError::Storage(_) | AppError::Repository(_) | AppError::Internal(_) => {
                "Failed to upload asset"
            }
        }
    }

    pub fn log_level(&self) -> LogLevel {
        match self {
            AppError::NoFileProvided => LogLevel::Debug,
            AppError::Storage(_) | AppError::Repository(_) | AppError::Internal(_) => {
                LogLevel::Error
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_file_is_a_client_error() {
        let err = AppError::NoFileProvided;
        assert_eq!(err.http_status_code(), 400);
        assert_eq!(err.client_message(), "No file uploaded");
        assert_eq!(err.log_level(), LogLevel::Debug);
    }

    #[test]
    fn intake_failures_are_server_errors_with_generic_message() {
        for err in [
            AppError::Storage("disk full".to_string()),
            AppError::Repository("connection reset".to_string()),
            AppError::Internal("oops".to_string()),
        ] {
            assert_eq!(err.http_status_code(), 500);
            assert_eq!(err.client_message(), "Failed to upload asset");
            assert_eq!(err.log_level(), LogLevel::Error);
        }
    }

    #[test]
    fn client_message_never_leaks_cause() {
        let err = AppError::Storage("/var/secret/path: permission denied".to_string());
        assert!(!err.client_message().contains("secret"));
    }
}
