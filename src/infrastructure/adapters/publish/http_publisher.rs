//! HTTP Artifact Publisher
//!
//! Implements ArtifactPublisherPort against an S3-compatible object store
//! over plain HTTP.
//!
//! PUT {endpoint}/{bucket}/{key} with the file bytes; the public URL is
//! {public_base}/{key}.

use async_trait::async_trait;
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use tokio::fs;

use crate::application::ports::{ArtifactPublisherPort, PublishError};
use crate::config::PublishConfig;

/// HTTP publisher configuration
#[derive(Debug, Clone)]
pub struct HttpArtifactPublisherConfig {
    pub endpoint: String,
    pub bucket: String,
    pub token: String,
    pub public_base: String,
    pub timeout_secs: u64,
}

impl From<&PublishConfig> for HttpArtifactPublisherConfig {
    fn from(config: &PublishConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            bucket: config.bucket.clone(),
            token: config.token.clone(),
            public_base: config.public_base(),
            timeout_secs: config.timeout_secs,
        }
    }
}

/// Object-store publisher
pub struct HttpArtifactPublisher {
    client: Client,
    config: HttpArtifactPublisherConfig,
}

impl HttpArtifactPublisher {
    pub fn new(config: HttpArtifactPublisherConfig) -> Result<Self, PublishError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PublishError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn object_url(&self, key: &str) -> String {
        format!("{}/{}/{}", self.config.endpoint, self.config.bucket, key)
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.config.public_base, key)
    }
}

#[async_trait]
impl ArtifactPublisherPort for HttpArtifactPublisher {
    async fn publish(&self, local_path: &Path, key: &str) -> Result<String, PublishError> {
        let bytes = fs::read(local_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PublishError::FileNotFound(local_path.display().to_string())
            } else {
                PublishError::IoError(e.to_string())
            }
        })?;

        tracing::debug!(
            url = %self.object_url(key),
            size = bytes.len(),
            "Uploading artifact"
        );

        let response = self
            .client
            .put(self.object_url(key))
            .bearer_auth(&self.config.token)
            .header("Content-Type", "image/png")
            .body(bytes)
            .send()
            .await
            .map_err(|e| PublishError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(PublishError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let public_url = self.public_url(key);
        tracing::info!(key = %key, url = %public_url, "Artifact published");

        Ok(public_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn publisher() -> HttpArtifactPublisher {
        HttpArtifactPublisher::new(HttpArtifactPublisherConfig {
            endpoint: "https://s3.example.com".to_string(),
            bucket: "decks".to_string(),
            token: "t".to_string(),
            public_base: "https://cdn.example.com".to_string(),
            timeout_secs: 30,
        })
        .unwrap()
    }

    #[test]
    fn test_object_url_composition() {
        assert_eq!(
            publisher().object_url("DOCTOR_SLIDES_x_0.png"),
            "https://s3.example.com/decks/DOCTOR_SLIDES_x_0.png"
        );
    }

    #[test]
    fn test_public_url_composition() {
        assert_eq!(
            publisher().public_url("DOCTOR_SLIDES_x_cover.png"),
            "https://cdn.example.com/DOCTOR_SLIDES_x_cover.png"
        );
    }

    #[tokio::test]
    async fn test_missing_file_is_file_not_found() {
        let result = publisher()
            .publish(Path::new("/nonexistent/file.png"), "k.png")
            .await;
        assert!(matches!(result, Err(PublishError::FileNotFound(_))));
    }
}
