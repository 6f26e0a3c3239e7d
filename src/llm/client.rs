use anyhow::{bail, Context, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::messages::{ChatMessage, ChatRequest, ChatResponse};
use super::KeyPointModel;
use crate::config::LlmConfig;

/// System prompt for key-point selection. The model must answer with a bare
/// JSON array of {"timeSeconds", "reason"} objects.
const KEY_POINTS_PROMPT: &str = "You are given a transcript of a screen recording with timestamps.\n\
Your task is to pick 3-8 key moments where taking a screenshot would help someone understand the content later.\n\
Choose moments like: topic changes, important claims, demo steps, UI changes, or key conclusions.\n\
Return a JSON array of objects, each with \"timeSeconds\" (number) and \"reason\" (string).\n\
Only use times that appear in the transcript. Keep reasons short (a few words).\n\
Example: [{\"timeSeconds\": 0, \"reason\": \"intro\"}, {\"timeSeconds\": 45.2, \"reason\": \"main demo step\"}]";

/// OpenAI-compatible chat model client
pub struct ChatModel {
    config: LlmConfig,
    api_key: String,
    client: Client,
}

impl ChatModel {
    /// Create a client from config
    ///
    /// Fails if the API key environment variable is unset or empty.
    pub fn new(config: LlmConfig) -> Result<Self> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .with_context(|| format!("{} is not set", config.api_key_env))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            config,
            api_key,
            client,
        })
    }
}

#[async_trait::async_trait]
impl KeyPointModel for ChatModel {
    async fn generate_key_points(&self, transcript: &str) -> Result<String> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage::system(KEY_POINTS_PROMPT),
                ChatMessage::user(transcript),
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        debug!(
            "Requesting key points from {} (model={})",
            self.config.endpoint, self.config.model
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("Chat completion request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("Chat completion request failed ({}): {}", status, body);
        }

        let payload: ChatResponse = response
            .json()
            .await
            .context("Failed to decode chat completion response")?;

        let content = payload
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        let content = content.trim();
        if content.is_empty() {
            bail!("Chat completion returned an empty response");
        }

        Ok(content.to_string())
    }

    fn name(&self) -> &str {
        &self.config.model
    }
}
