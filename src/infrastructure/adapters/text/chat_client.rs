//! Chat Completion Client
//!
//! Implements TextSynthesisPort against an OpenAI-style chat-completion API.
//!
//! POST {base_url}/v1/chat/completions
//! Request: {"model": "...", "messages": [{"role": "user", "content": "..."}]}
//! Response: {"choices": [{"message": {"content": "..."}}]}

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{TextSynthesisError, TextSynthesisPort};
use crate::config::TextSynthesisConfig;

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// Chat completion client configuration
#[derive(Debug, Clone)]
pub struct ChatCompletionClientConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl From<&TextSynthesisConfig> for ChatCompletionClientConfig {
    fn from(config: &TextSynthesisConfig) -> Self {
        Self {
            base_url: config.url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            timeout_secs: config.timeout_secs,
        }
    }
}

/// HTTP chat-completion client
pub struct ChatCompletionClient {
    client: Client,
    config: ChatCompletionClientConfig,
}

impl ChatCompletionClient {
    pub fn new(config: ChatCompletionClientConfig) -> Result<Self, TextSynthesisError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TextSynthesisError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.config.base_url)
    }
}

#[async_trait]
impl TextSynthesisPort for ChatCompletionClient {
    async fn complete(&self, prompt: &str) -> Result<String, TextSynthesisError> {
        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.to_string(),
            }],
        };

        tracing::debug!(
            url = %self.completions_url(),
            prompt_len = prompt.len(),
            "Sending completion request"
        );

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TextSynthesisError::Timeout
                } else if e.is_connect() {
                    TextSynthesisError::NetworkError(format!(
                        "Cannot connect to completion service: {}",
                        e
                    ))
                } else {
                    TextSynthesisError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TextSynthesisError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| TextSynthesisError::InvalidResponse(e.to_string()))?;

        let content = body
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                TextSynthesisError::InvalidResponse("response contained no choices".to_string())
            })?;

        tracing::debug!(response_len = content.len(), "Completion received");

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completions_url() {
        let client = ChatCompletionClient::new(ChatCompletionClientConfig {
            base_url: "https://api.example.com".to_string(),
            api_key: "k".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            timeout_secs: 30,
        })
        .unwrap();
        assert_eq!(
            client.completions_url(),
            "https://api.example.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_response_deserialization() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"Once upon a time."}}]}"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.choices[0].message.content, "Once upon a time.");
    }
}
