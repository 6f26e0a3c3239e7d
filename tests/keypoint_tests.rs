// Integration tests for key-point extraction
//
// These tests drive the extractor through the KeyPointModel trait with
// scripted responses, so no network access or API key is required.

use anyhow::Result;
use async_trait::async_trait;
use shotmark::{KeyPoint, KeyPointExtractor, KeyPointModel};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Model stand-in that returns a canned response and counts calls
struct ScriptedModel {
    response: String,
    calls: Arc<AtomicUsize>,
}

impl ScriptedModel {
    fn new(response: &str) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let model = Self {
            response: response.to_string(),
            calls: Arc::clone(&calls),
        };
        (model, calls)
    }
}

#[async_trait]
impl KeyPointModel for ScriptedModel {
    async fn generate_key_points(&self, _transcript: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Model stand-in that always fails, like a provider outage
struct FailingModel;

#[async_trait]
impl KeyPointModel for FailingModel {
    async fn generate_key_points(&self, _transcript: &str) -> Result<String> {
        anyhow::bail!("model unavailable")
    }

    fn name(&self) -> &str {
        "failing"
    }
}

fn extractor_with(response: &str) -> (KeyPointExtractor, Arc<AtomicUsize>) {
    let (model, calls) = ScriptedModel::new(response);
    (KeyPointExtractor::new(Box::new(model)), calls)
}

#[tokio::test]
async fn test_empty_transcript_skips_model() -> Result<()> {
    let (extractor, calls) = extractor_with(r#"[{"timeSeconds": 0, "reason": "intro"}]"#);

    assert!(extractor.extract("").await?.is_empty());
    assert!(extractor.extract("   \n  ").await?.is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 0, "model should not be called");

    Ok(())
}

#[tokio::test]
async fn test_valid_json_response() -> Result<()> {
    let raw = r#"[
        {"timeSeconds": 0, "reason": "intro"},
        {"timeSeconds": 45.2, "reason": "main demo step"}
    ]"#;
    let (extractor, calls) = extractor_with(raw);

    let result = extractor.extract("[0.0s] Hello [45.2s] World").await?;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(result.len(), 2);
    assert_eq!(
        result[0],
        KeyPoint {
            time_seconds: 0.0,
            reason: "intro".to_string()
        }
    );
    assert_eq!(
        result[1],
        KeyPoint {
            time_seconds: 45.2,
            reason: "main demo step".to_string()
        }
    );

    Ok(())
}

#[tokio::test]
async fn test_markdown_fenced_response() -> Result<()> {
    let raw = "```json\n[{\"timeSeconds\": 1, \"reason\": \"one\"}]\n```";
    let (extractor, _) = extractor_with(raw);

    let result = extractor.extract("[1.0s] text").await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].time_seconds, 1.0);
    assert_eq!(result[0].reason, "one");

    Ok(())
}

#[tokio::test]
async fn test_non_json_response_returns_empty() -> Result<()> {
    let (extractor, _) = extractor_with("Sorry, I cannot help with that.");

    let result = extractor.extract("[0.0s] Hello").await?;

    assert!(result.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_non_array_response_returns_empty() -> Result<()> {
    let (extractor, _) = extractor_with(r#"{"timeSeconds": 0, "reason": "intro"}"#);

    let result = extractor.extract("[0.0s] Hello").await?;

    assert!(result.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_invalid_entries_are_skipped() -> Result<()> {
    let raw = r#"[
        {"timeSeconds": 0, "reason": "ok"},
        {"reason": "no time"},
        {"timeSeconds": 5},
        {"timeSeconds": -1, "reason": "negative"},
        {"timeSeconds": 10, "reason": ""}
    ]"#;
    let (extractor, _) = extractor_with(raw);

    let result = extractor.extract("[0.0s] Hello").await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].time_seconds, 0.0);
    assert_eq!(result[0].reason, "ok");

    Ok(())
}

#[tokio::test]
async fn test_model_error_propagates() {
    let extractor = KeyPointExtractor::new(Box::new(FailingModel));

    let result = extractor.extract("[0.0s] Hello").await;

    assert!(result.is_err(), "provider failure should reach the caller");
}

#[tokio::test]
async fn test_model_error_skipped_for_empty_transcript() -> Result<()> {
    // Empty input short-circuits before the model, even a broken one
    let extractor = KeyPointExtractor::new(Box::new(FailingModel));

    let result = extractor.extract("   ").await?;

    assert!(result.is_empty());

    Ok(())
}
