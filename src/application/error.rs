//! Pipeline Error Taxonomy
//!
//! Every variant is fatal: it aborts the whole run. There is no retry and no
//! partial-result delivery; pacing sleeps are the only defense against
//! upstream throttling. Stages propagate these values up to the driver, which
//! aborts the batch; only the binary converts the error into a non-zero exit.

use thiserror::Error;

use super::ports::{ImageSynthesisError, PublishError, RenderError, TextSynthesisError};
use crate::domain::prompt::TitleFormatError;

/// Fatal pipeline error
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Text/image synthesis or publish call failed or returned a non-success
    /// status
    #[error("Upstream call failed: {0}")]
    UpstreamCall(String),

    /// A transport-successful response failed a required structural check
    #[error("Response shape violation: {0}")]
    ResponseShape(String),

    /// Local file create/open/write failure
    #[error("Local IO failure: {0}")]
    LocalIo(String),

    /// The presentation renderer rejected the operation sequence
    #[error("Deck rendering failed: {0}")]
    Render(String),

    /// A page task was aborted before completing
    #[error("Page task aborted: {0}")]
    TaskAborted(String),
}

impl From<TextSynthesisError> for PipelineError {
    fn from(err: TextSynthesisError) -> Self {
        match err {
            TextSynthesisError::InvalidResponse(msg) => Self::ResponseShape(msg),
            other => Self::UpstreamCall(other.to_string()),
        }
    }
}

impl From<ImageSynthesisError> for PipelineError {
    fn from(err: ImageSynthesisError) -> Self {
        match err {
            ImageSynthesisError::InvalidResponse(_)
            | ImageSynthesisError::UnexpectedArtifactCount(_) => {
                Self::ResponseShape(err.to_string())
            }
            other => Self::UpstreamCall(other.to_string()),
        }
    }
}

impl From<PublishError> for PipelineError {
    fn from(err: PublishError) -> Self {
        match err {
            PublishError::FileNotFound(_) | PublishError::IoError(_) => {
                Self::LocalIo(err.to_string())
            }
            other => Self::UpstreamCall(other.to_string()),
        }
    }
}

impl From<RenderError> for PipelineError {
    fn from(err: RenderError) -> Self {
        Self::Render(err.to_string())
    }
}

impl From<TitleFormatError> for PipelineError {
    fn from(err: TitleFormatError) -> Self {
        Self::ResponseShape(err.to_string())
    }
}

impl From<std::io::Error> for PipelineError {
    fn from(err: std::io::Error) -> Self {
        Self::LocalIo(err.to_string())
    }
}
