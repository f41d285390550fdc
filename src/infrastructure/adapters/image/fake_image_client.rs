//! Fake Image Synthesis Client (for tests)

use async_trait::async_trait;
use std::sync::Mutex;

use crate::application::ports::{
    ImageSynthesisError, ImageSynthesisPort, RenderedImage, WeightedPrompt,
};

/// Minimal valid PNG signature; tests only care that bytes land on disk
const FAKE_PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Canned image synthesis
pub struct FakeImageSynthesis {
    prompts: Mutex<Vec<Vec<WeightedPrompt>>>,
    fail_always: bool,
    fail_on: Option<String>,
}

impl FakeImageSynthesis {
    pub fn new() -> Self {
        Self {
            prompts: Mutex::new(Vec::new()),
            fail_always: false,
            fail_on: None,
        }
    }

    /// Fail every render
    pub fn failing(mut self) -> Self {
        self.fail_always = true;
        self
    }

    /// Fail any render whose positive prompt contains `marker`
    /// (case-insensitive)
    pub fn failing_on(mut self, marker: impl Into<String>) -> Self {
        self.fail_on = Some(marker.into().to_lowercase());
        self
    }

    /// Every prompt list rendered so far
    pub fn rendered_prompts(&self) -> Vec<Vec<WeightedPrompt>> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Default for FakeImageSynthesis {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageSynthesisPort for FakeImageSynthesis {
    async fn render(
        &self,
        prompts: &[WeightedPrompt],
    ) -> Result<RenderedImage, ImageSynthesisError> {
        self.prompts.lock().unwrap().push(prompts.to_vec());

        if self.fail_always {
            return Err(ImageSynthesisError::NetworkError("canned failure".to_string()));
        }
        if let Some(marker) = &self.fail_on {
            if prompts
                .iter()
                .any(|p| p.weight > 0 && p.text.to_lowercase().contains(marker))
            {
                return Err(ImageSynthesisError::NetworkError(format!(
                    "canned failure on marker: {}",
                    marker
                )));
            }
        }

        Ok(RenderedImage {
            bytes: FAKE_PNG.to_vec(),
            finish_reason: "SUCCESS".to_string(),
        })
    }
}
