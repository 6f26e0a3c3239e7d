//! LLM provider integration
//!
//! The key-point analysis itself is delegated to a chat-completion model.
//! The extractor depends on the `KeyPointModel` trait; `ChatModel` implements
//! it over any OpenAI-compatible chat-completions endpoint.

pub mod client;
pub mod messages;

pub use client::ChatModel;
pub use messages::{ChatChoice, ChatMessage, ChatRequest, ChatResponse};

use anyhow::Result;

/// A model that proposes screenshot key points for a transcript
///
/// Implementations return the raw completion text; parsing and validation
/// happen downstream. Errors here are provider errors (bad credentials,
/// failed request, empty completion) and are not retried.
#[async_trait::async_trait]
pub trait KeyPointModel: Send + Sync {
    /// Ask the model for key points, returning its raw text response
    async fn generate_key_points(&self, transcript: &str) -> Result<String>;

    /// Model name for logging
    fn name(&self) -> &str;
}
