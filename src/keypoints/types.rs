use serde::{Deserialize, Serialize};

/// A moment in a recording worth capturing as a screenshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPoint {
    /// Offset from the start of the recording, in seconds (never negative)
    pub time_seconds: f64,

    /// Short human-readable reason (trimmed, never empty)
    pub reason: String,
}
