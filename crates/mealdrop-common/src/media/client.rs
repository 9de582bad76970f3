//! HTTP client for the external media host
//!
//! Images are posted as raw bytes to `{base_url}/{folder}/{key}` with bearer
//! authentication; the host answers with the public URL of the stored object.

use serde::Deserialize;
use uuid::Uuid;

use crate::config::MediaConfig;
use crate::error::AppError;

/// Response body returned by the media host on a successful upload
#[derive(Debug, Deserialize)]
struct UploadResponse {
    url: String,
}

/// Client for uploading images to the media host
#[derive(Clone)]
pub struct MediaClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl MediaClient {
    /// Create a new media client
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built
    pub fn new(config: &MediaConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(AppError::internal)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Upload an image buffer under a folder tag, returning its public URL
    ///
    /// The object key is a fresh UUID; the original file name is not kept.
    ///
    /// # Errors
    /// Returns an error if the upload fails or the host answers with a
    /// non-success status
    pub async fn upload(
        &self,
        folder: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, AppError> {
        let key = Uuid::new_v4();
        let url = format!("{}/{}/{}", self.base_url, folder, key);

        let resp = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", self.api_key),
            )
            .body(bytes)
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("Media upload failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(AppError::ExternalService(format!(
                "Media host answered {status}: {text}"
            )));
        }

        let body: UploadResponse = resp
            .json()
            .await
            .map_err(|e| AppError::ExternalService(format!("Invalid media host response: {e}")))?;

        Ok(body.url)
    }
}

impl std::fmt::Debug for MediaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(base_url: &str) -> MediaConfig {
        MediaConfig {
            base_url: base_url.to_string(),
            api_key: "test-key".to_string(),
            upload_max_bytes: 1024,
        }
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let client = MediaClient::new(&test_config("https://media.example.com/")).unwrap();
        assert_eq!(client.base_url, "https://media.example.com");
    }

    #[test]
    fn test_debug_hides_api_key() {
        let client = MediaClient::new(&test_config("https://media.example.com")).unwrap();
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("test-key"));
    }
}
