//! Fake Text Synthesis Client (for tests)
//!
//! Answers by prompt kind with canned responses, so pipeline tests run
//! without a live completion service. The illustration-brief response echoes
//! the excerpt embedded in the prompt, which lets tests trace a paragraph all
//! the way into the derived image prompt.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::application::ports::{TextSynthesisError, TextSynthesisPort};

const DEFAULT_NARRATIVE: &str = "Milo woke before sunrise.\nAt last, the river led him home.";
const DEFAULT_TITLE_RESPONSE: &str = "TITLE: \"The Brave Fox\"";
const DEFAULT_COVER_CONCEPT: &str = "A fox silhouetted against the moon.";

/// Canned text synthesis
pub struct FakeTextSynthesis {
    narrative: String,
    title_response: String,
    cover_concept: String,
    prompts: Mutex<Vec<String>>,
    fail: bool,
}

impl FakeTextSynthesis {
    pub fn new() -> Self {
        Self {
            narrative: DEFAULT_NARRATIVE.to_string(),
            title_response: DEFAULT_TITLE_RESPONSE.to_string(),
            cover_concept: DEFAULT_COVER_CONCEPT.to_string(),
            prompts: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// Replace the canned narrative
    pub fn with_narrative(mut self, narrative: impl Into<String>) -> Self {
        self.narrative = narrative.into();
        self
    }

    /// Replace the canned title response (e.g. to violate the format)
    pub fn with_title_response(mut self, response: impl Into<String>) -> Self {
        self.title_response = response.into();
        self
    }

    /// Fail every completion with a service error
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// All prompts received so far
    pub fn received_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// The first quoted section of a prompt (the embedded excerpt)
    fn quoted_section(prompt: &str) -> Option<&str> {
        prompt.split('"').nth(1)
    }
}

impl Default for FakeTextSynthesis {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextSynthesisPort for FakeTextSynthesis {
    async fn complete(&self, prompt: &str) -> Result<String, TextSynthesisError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if self.fail {
            return Err(TextSynthesisError::ServiceError("canned failure".to_string()));
        }

        if prompt.starts_with("Write me a short story") {
            return Ok(self.narrative.clone());
        }
        if prompt.contains("potential title") {
            return Ok(self.title_response.clone());
        }
        if prompt.contains("cover") {
            return Ok(self.cover_concept.clone());
        }
        if prompt.contains("excerpt") {
            let excerpt = Self::quoted_section(prompt).unwrap_or("a quiet scene");
            return Ok(format!("An illustration of: {}", excerpt));
        }

        Ok("ok".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_brief_response_echoes_excerpt() {
        let fake = FakeTextSynthesis::new();
        let response = fake
            .complete("The following is an excerpt ...\n\n\"Milo crossed the river.\"")
            .await
            .unwrap();
        assert!(response.contains("Milo crossed the river."));
    }

    #[tokio::test]
    async fn test_prompts_are_recorded() {
        let fake = FakeTextSynthesis::new();
        fake.complete("Write me a short story about a fox").await.unwrap();
        assert_eq!(fake.received_prompts().len(), 1);
    }
}
