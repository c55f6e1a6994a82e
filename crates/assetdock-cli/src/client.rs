//! Upload client for the intake service.

use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::path::Path;
use std::time::Duration;

const UPLOAD_PATH: &str = "/api/assets/upload";

pub struct UploadClient {
    client: Client,
    base_url: String,
}

impl UploadClient {
    pub fn new(base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("ASSETDOCK_API_URL")
            .unwrap_or_else(|_| "http://localhost:4000".to_string());
        Self::new(base_url)
    }

    pub fn upload_url(&self) -> String {
        format!("{}{}", self.base_url, UPLOAD_PATH)
    }

    /// Submit one file as a multipart POST, fire-and-forget.
    ///
    /// The response is deliberately ignored, as is any transport failure:
    /// the contract is a single-shot submission with no retry and no error
    /// surfaced to the user.
    pub async fn submit_upload(&self, path: &Path, content_type: &str) -> Result<()> {
        let data = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        let part = Part::bytes(data)
            .file_name(filename)
            .mime_str(content_type)
            .context("Invalid content type")?;
        let form = Form::new().part("file", part);

        tracing::debug!(url = %self.upload_url(), "Submitting upload");
        let _ = self
            .client
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = UploadClient::new("http://localhost:4000/".to_string()).unwrap();
        assert_eq!(client.upload_url(), "http://localhost:4000/api/assets/upload");
    }

    #[test]
    fn upload_url_joins_fixed_path() {
        let client = UploadClient::new("https://dam.example.com".to_string()).unwrap();
        assert_eq!(
            client.upload_url(),
            "https://dam.example.com/api/assets/upload"
        );
    }
}
