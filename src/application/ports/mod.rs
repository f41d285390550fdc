//! Application Ports
//!
//! Abstract interfaces to the external collaborators; concrete adapters live
//! in the infrastructure layer.

mod artifact_publisher;
mod deck_renderer;
mod image_synthesis;
mod text_synthesis;

pub use artifact_publisher::{ArtifactPublisherPort, PublishError};
pub use deck_renderer::{DeckHandle, DeckRendererPort, RenderError};
pub use image_synthesis::{
    ImageSynthesisError, ImageSynthesisPort, RenderedImage, WeightedPrompt,
};
pub use text_synthesis::{TextSynthesisError, TextSynthesisPort};
