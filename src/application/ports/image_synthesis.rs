//! Image Synthesis Port
//!
//! Renders a raster image from a weighted list of text prompts. Positive
//! weights emphasize a term, negative weights suppress it. The pipeline
//! always requests a single artifact.

use async_trait::async_trait;
use thiserror::Error;

/// Image synthesis error
#[derive(Debug, Error)]
pub enum ImageSynthesisError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Expected exactly one artifact, got {0}")]
    UnexpectedArtifactCount(usize),
}

/// One prompt term with a signed weight
#[derive(Debug, Clone)]
pub struct WeightedPrompt {
    pub text: String,
    pub weight: i32,
}

impl WeightedPrompt {
    /// Emphasized term
    pub fn positive(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            weight: 1,
        }
    }

    /// Suppressed term
    pub fn negative(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            weight: -1,
        }
    }
}

/// A rendered artifact
#[derive(Debug, Clone)]
pub struct RenderedImage {
    /// Raw PNG bytes
    pub bytes: Vec<u8>,
    /// Upstream completion status ("SUCCESS", ...)
    pub finish_reason: String,
}

/// Image Synthesis Port
#[async_trait]
pub trait ImageSynthesisPort: Send + Sync {
    /// Render exactly one image from the weighted prompts
    async fn render(&self, prompts: &[WeightedPrompt]) -> Result<RenderedImage, ImageSynthesisError>;
}
