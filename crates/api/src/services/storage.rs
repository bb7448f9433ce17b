//! Object storage client for student avatars.
//!
//! Talks to a Supabase-storage-compatible REST API: raw uploads with an
//! upsert flag, and time-limited signed read URLs.

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::config::StorageConfig;

/// Upload timeout; avatar images are small.
const UPLOAD_TIMEOUT_SECS: u64 = 15;

/// Errors from the object store.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Storage returned status {0}: {1}")]
    BadStatus(u16, String),
}

#[derive(Debug, Deserialize)]
struct SignUrlResponse {
    #[serde(rename = "signedURL")]
    signed_url: String,
}

/// Client for the avatar object store.
pub struct StorageClient {
    client: Client,
    config: StorageConfig,
}

impl StorageClient {
    /// Create a client when storage is configured; `None` otherwise.
    pub fn from_config(config: &StorageConfig) -> Option<Self> {
        if config.url.is_empty() {
            return None;
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(UPLOAD_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Some(Self {
            client,
            config: config.clone(),
        })
    }

    /// Seconds a signed read URL stays valid.
    pub fn signed_url_expiry_secs(&self) -> u64 {
        self.config.signed_url_expiry_secs
    }

    /// Upload a blob to the configured bucket.
    pub async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
        upsert: bool,
    ) -> Result<(), StorageError> {
        let url = format!(
            "{}/object/{}/{}",
            self.config.url.trim_end_matches('/'),
            self.config.bucket,
            path
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.service_key)
            .header("Content-Type", content_type)
            .header("x-upsert", if upsert { "true" } else { "false" })
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StorageError::BadStatus(status.as_u16(), message));
        }

        debug!(path = %path, "Uploaded object");
        Ok(())
    }

    /// Issue a time-limited signed read URL for a stored blob.
    pub async fn create_signed_url(&self, path: &str) -> Result<String, StorageError> {
        let base = self.config.url.trim_end_matches('/');
        let url = format!("{}/object/sign/{}/{}", base, self.config.bucket, path);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.service_key)
            .json(&json!({ "expiresIn": self.config.signed_url_expiry_secs }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StorageError::BadStatus(status.as_u16(), message));
        }

        let signed: SignUrlResponse = response.json().await?;
        Ok(format!("{}{}", base, signed.signed_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_disabled_without_url() {
        let config = StorageConfig::default();
        assert!(StorageClient::from_config(&config).is_none());
    }

    #[test]
    fn test_from_config_enabled_with_url() {
        let config = StorageConfig {
            url: "https://storage.example.com/storage/v1".to_string(),
            service_key: "service-key".to_string(),
            ..StorageConfig::default()
        };
        let client = StorageClient::from_config(&config).unwrap();
        assert_eq!(client.signed_url_expiry_secs(), 3600);
    }

    #[test]
    fn test_sign_url_response_deserialization() {
        let parsed: SignUrlResponse = serde_json::from_str(
            r#"{"signedURL":"/object/sign/student-avatars/abc.jpg?token=xyz"}"#,
        )
        .unwrap();
        assert!(parsed.signed_url.contains("student-avatars"));
    }
}
