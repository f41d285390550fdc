//! Deck renderer adapters

mod fake_renderer;
mod slides_client;

pub use fake_renderer::FakeDeckRenderer;
pub use slides_client::{SlidesRendererClient, SlidesRendererClientConfig};
