use serde_json::Value;
use tracing::warn;

use super::types::KeyPoint;

/// Strip a markdown code fence wrapping the response, if present.
///
/// The opening fence line may carry a language tag (```json). The closing
/// fence is removed when the last non-empty line is a bare fence marker.
fn strip_code_fence(raw: &str) -> String {
    let trimmed = raw.trim_start();
    if !trimmed.starts_with("```") {
        return raw.to_string();
    }

    let mut lines: Vec<&str> = trimmed.lines().collect();
    lines.remove(0);

    while let Some(last) = lines.last() {
        if last.trim().is_empty() {
            lines.pop();
        } else {
            break;
        }
    }

    if lines.last().map(|line| line.trim() == "```").unwrap_or(false) {
        lines.pop();
    }

    lines.join("\n")
}

/// Parse and validate a raw model response into key points.
///
/// Never fails: unparseable responses and malformed entries degrade to an
/// empty (or shorter) list. Entry order is preserved; no deduplication.
pub fn sanitize_key_points(raw: &str) -> Vec<KeyPoint> {
    let cleaned = strip_code_fence(raw);

    let data: Value = match serde_json::from_str(&cleaned) {
        Ok(value) => value,
        Err(e) => {
            warn!("Key points JSON parse failed: {}", e);
            return Vec::new();
        }
    };

    let items = match data {
        Value::Array(items) => items,
        _ => return Vec::new(),
    };

    let mut result = Vec::new();
    for item in items {
        let entry = match item {
            Value::Object(entry) => entry,
            _ => continue,
        };

        // Keep only entries with a non-negative numeric timeSeconds and a
        // non-blank string reason; everything else is skipped silently.
        let time_seconds = match entry.get("timeSeconds").and_then(Value::as_f64) {
            Some(seconds) if seconds >= 0.0 => seconds,
            _ => continue,
        };

        let reason = match entry.get("reason").and_then(Value::as_str) {
            Some(reason) if !reason.trim().is_empty() => reason.trim().to_string(),
            _ => continue,
        };

        result.push(KeyPoint {
            time_seconds,
            reason,
        });
    }

    result
}
