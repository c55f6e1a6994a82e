//! Configuration module
//!
//! Environment-derived settings are read once at startup into an explicit
//! `Config` struct that is passed to the service, never looked up ambiently.

use std::env;

const DEFAULT_SERVER_PORT: u16 = 4000;
const DEFAULT_STORAGE_ROOT: &str = "uploads";
const DEFAULT_MAX_UPLOAD_SIZE_MB: usize = 50;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// TCP port the HTTP server binds to.
    pub server_port: u16,
    /// Allowed CORS origins; `["*"]` opens the API to all origins.
    pub cors_origins: Vec<String>,
    /// Storage backend selector: "local" or "memory".
    pub storage_backend: String,
    /// Directory uploaded bytes are written to (local backend).
    pub storage_root: String,
    /// Upper bound on request body size.
    pub max_upload_size_bytes: usize,
    /// Deployment environment name ("development", "production", ...).
    pub environment: String,
}

impl Config {
    /// Load configuration from the process environment (and `.env` if present).
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let server_port = match env::var("PORT") {
            Ok(port) => port
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid port number, got '{}'", port))?,
            Err(_) => DEFAULT_SERVER_PORT,
        };

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let storage_backend = env::var("STORAGE_BACKEND")
            .unwrap_or_else(|_| "local".to_string())
            .to_lowercase();

        let storage_root =
            env::var("STORAGE_ROOT").unwrap_or_else(|_| DEFAULT_STORAGE_ROOT.to_string());

        let max_upload_size_mb = match env::var("MAX_UPLOAD_SIZE_MB") {
            Ok(mb) => mb.parse::<usize>().map_err(|_| {
                anyhow::anyhow!("MAX_UPLOAD_SIZE_MB must be a positive integer, got '{}'", mb)
            })?,
            Err(_) => DEFAULT_MAX_UPLOAD_SIZE_MB,
        };

        let environment =
            env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let config = Config {
            server_port,
            cors_origins,
            storage_backend,
            storage_root,
            max_upload_size_bytes: max_upload_size_mb * 1024 * 1024,
            environment,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values. Called by `from_env`, and directly in tests.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.storage_root.trim().is_empty() {
            anyhow::bail!("STORAGE_ROOT must not be empty");
        }
        if !matches!(self.storage_backend.as_str(), "local" | "memory") {
            anyhow::bail!(
                "STORAGE_BACKEND must be 'local' or 'memory', got '{}'",
                self.storage_backend
            );
        }
        if self.max_upload_size_bytes == 0 {
            anyhow::bail!("MAX_UPLOAD_SIZE_MB must be greater than zero");
        }
        if self.cors_origins.is_empty() {
            anyhow::bail!("CORS_ORIGINS must contain at least one origin (use '*' for any)");
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_port: DEFAULT_SERVER_PORT,
            cors_origins: vec!["*".to_string()],
            storage_backend: "local".to_string(),
            storage_root: DEFAULT_STORAGE_ROOT.to_string(),
            max_upload_size_bytes: DEFAULT_MAX_UPLOAD_SIZE_MB * 1024 * 1024,
            environment: "development".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server_port, 4000);
        assert_eq!(config.storage_root, "uploads");
        assert!(!config.is_production());
    }

    #[test]
    fn empty_storage_root_rejected() {
        let config = Config {
            storage_root: "  ".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn unknown_backend_rejected() {
        let config = Config {
            storage_backend: "s3".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_upload_limit_rejected() {
        let config = Config {
            max_upload_size_bytes: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn production_detection() {
        let config = Config {
            environment: "Production".to_string(),
            ..Config::default()
        };
        assert!(config.is_production());

        let config = Config {
            environment: "prod".to_string(),
            ..Config::default()
        };
        assert!(config.is_production());
    }
}
