//! Fake Artifact Publisher (for tests)

use async_trait::async_trait;
use std::path::Path;
use std::sync::Mutex;

use crate::application::ports::{ArtifactPublisherPort, PublishError};

/// In-memory publisher: verifies the local file exists and composes a public
/// URL without any network traffic.
pub struct FakeArtifactPublisher {
    keys: Mutex<Vec<String>>,
}

impl FakeArtifactPublisher {
    pub fn new() -> Self {
        Self {
            keys: Mutex::new(Vec::new()),
        }
    }

    /// All keys published so far
    pub fn published_keys(&self) -> Vec<String> {
        self.keys.lock().unwrap().clone()
    }
}

impl Default for FakeArtifactPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArtifactPublisherPort for FakeArtifactPublisher {
    async fn publish(&self, local_path: &Path, key: &str) -> Result<String, PublishError> {
        if !local_path.exists() {
            return Err(PublishError::FileNotFound(
                local_path.display().to_string(),
            ));
        }
        self.keys.lock().unwrap().push(key.to_string());
        Ok(format!("https://cdn.example.com/{}", key))
    }
}
