//! Image synthesis adapters

mod fake_image_client;
mod stability_client;

pub use fake_image_client::FakeImageSynthesis;
pub use stability_client::{StabilityImageClient, StabilityImageClientConfig};
