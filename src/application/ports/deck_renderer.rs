//! Deck Renderer Port
//!
//! Executes an ordered layout-operation sequence against the presentation
//! service, producing the final deck.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::deck::DeckOp;

/// Rendering error
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Handle to a rendered deck
#[derive(Debug, Clone)]
pub struct DeckHandle {
    /// Renderer-side presentation id
    pub presentation_id: String,
}

/// Deck Renderer Port
#[async_trait]
pub trait DeckRendererPort: Send + Sync {
    /// Create a presentation titled `title` and execute `ops` against it, in
    /// order
    async fn render(&self, title: &str, ops: &[DeckOp]) -> Result<DeckHandle, RenderError>;
}
