//! Artifact publishing adapters

mod fake_publisher;
mod http_publisher;

pub use fake_publisher::FakeArtifactPublisher;
pub use http_publisher::{HttpArtifactPublisher, HttpArtifactPublisherConfig};
