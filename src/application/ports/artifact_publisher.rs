//! Artifact Publisher Port
//!
//! Persists a local raster file into the object store and returns its
//! publicly addressable URL.

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// Publishing error
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Service error: {0}")]
    ServiceError(String),
}

/// Artifact Publisher Port
#[async_trait]
pub trait ArtifactPublisherPort: Send + Sync {
    /// Upload the file at `local_path` under `key`, returning the public URL
    async fn publish(&self, local_path: &Path, key: &str) -> Result<String, PublishError>;
}
