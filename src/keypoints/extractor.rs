use anyhow::Result;
use tracing::{debug, info};

use super::sanitize::sanitize_key_points;
use super::types::KeyPoint;
use crate::llm::KeyPointModel;

/// Extracts screenshot-worthy moments from a timestamped transcript
pub struct KeyPointExtractor {
    model: Box<dyn KeyPointModel>,
}

impl KeyPointExtractor {
    pub fn new(model: Box<dyn KeyPointModel>) -> Self {
        Self { model }
    }

    /// Extract key points from a timestamped transcript
    /// (e.g. "[0.0s] Hello [45.2s] World").
    ///
    /// Model failures (credentials, provider errors, empty completions)
    /// propagate to the caller. Unusable model output is not an error: it
    /// degrades to an empty list.
    pub async fn extract(&self, transcript: &str) -> Result<Vec<KeyPoint>> {
        if transcript.trim().is_empty() {
            debug!("Empty transcript, skipping key point extraction");
            return Ok(Vec::new());
        }

        let raw = self.model.generate_key_points(transcript).await?;
        let key_points = sanitize_key_points(&raw);

        info!(
            "Extracted {} key points from transcript ({} chars) via {}",
            key_points.len(),
            transcript.len(),
            self.model.name()
        );

        Ok(key_points)
    }
}
