//! Infrastructure Adapters
//!
//! Concrete implementations of the application ports.

mod image;
mod publish;
mod renderer;
mod text;

pub use image::{FakeImageSynthesis, StabilityImageClient, StabilityImageClientConfig};
pub use publish::{FakeArtifactPublisher, HttpArtifactPublisher, HttpArtifactPublisherConfig};
pub use renderer::{FakeDeckRenderer, SlidesRendererClient, SlidesRendererClientConfig};
pub use text::{ChatCompletionClient, ChatCompletionClientConfig, FakeTextSynthesis};
