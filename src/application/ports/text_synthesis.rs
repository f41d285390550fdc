//! Text Synthesis Port
//!
//! Single request/response free-text completion; no streaming, no
//! conversation state between calls.

use async_trait::async_trait;
use thiserror::Error;

/// Text synthesis error
#[derive(Debug, Error)]
pub enum TextSynthesisError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Text Synthesis Port
#[async_trait]
pub trait TextSynthesisPort: Send + Sync {
    /// Produce a free-text completion for a prompt
    async fn complete(&self, prompt: &str) -> Result<String, TextSynthesisError>;
}
