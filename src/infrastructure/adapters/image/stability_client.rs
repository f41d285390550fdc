//! Stability Image Client
//!
//! Implements ImageSynthesisPort against a Stability-style text-to-image API.
//!
//! POST {base_url}/v1/generation/{engine}/text-to-image
//! Request: JSON with fixed size/steps/seed/sample configuration plus the
//! weighted text prompts
//! Response: {"artifacts": [{"base64": "...", "finishReason": "...", "seed": n}]}

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{
    ImageSynthesisError, ImageSynthesisPort, RenderedImage, WeightedPrompt,
};
use crate::config::ImageSynthesisConfig;

// Fixed generation parameters; the pipeline never varies them
const STEPS: u32 = 40;
const WIDTH: u32 = 1344;
const HEIGHT: u32 = 768;
const SEED: u32 = 0;
const CFG_SCALE: u32 = 10;
const SAMPLES: u32 = 1;

#[derive(Debug, Serialize)]
struct TextPrompt {
    text: String,
    weight: i32,
}

#[derive(Debug, Serialize)]
struct GenerationRequest {
    steps: u32,
    width: u32,
    height: u32,
    seed: u32,
    cfg_scale: u32,
    samples: u32,
    text_prompts: Vec<TextPrompt>,
}

#[derive(Debug, Deserialize)]
struct GenerationResponse {
    artifacts: Vec<Artifact>,
}

#[derive(Debug, Deserialize)]
struct Artifact {
    base64: String,
    #[serde(rename = "finishReason")]
    finish_reason: String,
}

/// Stability client configuration
#[derive(Debug, Clone)]
pub struct StabilityImageClientConfig {
    pub base_url: String,
    pub api_key: String,
    pub engine: String,
    pub client_id: String,
    pub timeout_secs: u64,
}

impl From<&ImageSynthesisConfig> for StabilityImageClientConfig {
    fn from(config: &ImageSynthesisConfig) -> Self {
        Self {
            base_url: config.url.clone(),
            api_key: config.api_key.clone(),
            engine: config.engine.clone(),
            client_id: config.client_id.clone(),
            timeout_secs: config.timeout_secs,
        }
    }
}

/// HTTP text-to-image client
pub struct StabilityImageClient {
    client: Client,
    config: StabilityImageClientConfig,
}

impl StabilityImageClient {
    pub fn new(config: StabilityImageClientConfig) -> Result<Self, ImageSynthesisError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ImageSynthesisError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn generation_url(&self) -> String {
        format!(
            "{}/v1/generation/{}/text-to-image",
            self.config.base_url, self.config.engine
        )
    }
}

#[async_trait]
impl ImageSynthesisPort for StabilityImageClient {
    async fn render(
        &self,
        prompts: &[WeightedPrompt],
    ) -> Result<RenderedImage, ImageSynthesisError> {
        let request = GenerationRequest {
            steps: STEPS,
            width: WIDTH,
            height: HEIGHT,
            seed: SEED,
            cfg_scale: CFG_SCALE,
            samples: SAMPLES,
            text_prompts: prompts
                .iter()
                .map(|p| TextPrompt {
                    text: p.text.clone(),
                    weight: p.weight,
                })
                .collect(),
        };

        tracing::debug!(
            url = %self.generation_url(),
            prompt_count = prompts.len(),
            "Sending image generation request"
        );

        let response = self
            .client
            .post(self.generation_url())
            .header("Accept", "application/json")
            .header("Stability-Client-ID", &self.config.client_id)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ImageSynthesisError::Timeout
                } else if e.is_connect() {
                    ImageSynthesisError::NetworkError(format!(
                        "Cannot connect to image service: {}",
                        e
                    ))
                } else {
                    ImageSynthesisError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ImageSynthesisError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body: GenerationResponse = response
            .json()
            .await
            .map_err(|e| ImageSynthesisError::InvalidResponse(e.to_string()))?;

        if body.artifacts.len() != 1 {
            return Err(ImageSynthesisError::UnexpectedArtifactCount(
                body.artifacts.len(),
            ));
        }
        let artifact = body
            .artifacts
            .into_iter()
            .next()
            .ok_or(ImageSynthesisError::UnexpectedArtifactCount(0))?;

        let bytes = BASE64
            .decode(artifact.base64.as_bytes())
            .map_err(|e| ImageSynthesisError::InvalidResponse(format!("bad base64: {}", e)))?;

        tracing::info!(
            image_size = bytes.len(),
            finish_reason = %artifact.finish_reason,
            "Image rendered"
        );

        Ok(RenderedImage {
            bytes,
            finish_reason: artifact.finish_reason,
        })
    }
}
