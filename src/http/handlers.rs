use super::state::AppState;
use crate::keypoints::KeyPoint;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ExtractKeyPointsRequest {
    /// Timestamped transcript text (e.g. "[0.0s] Hello [45.2s] World")
    pub transcript: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractKeyPointsResponse {
    pub request_id: String,
    pub extracted_at: DateTime<Utc>,
    pub count: usize,
    pub key_points: Vec<KeyPoint>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /recordings/keypoints
/// Extract screenshot key points from a transcript
pub async fn extract_key_points(
    State(state): State<AppState>,
    Json(req): Json<ExtractKeyPointsRequest>,
) -> impl IntoResponse {
    let request_id = format!("keypoints-{}", uuid::Uuid::new_v4());

    info!(
        "Extracting key points (request={}, transcript_chars={})",
        request_id,
        req.transcript.len()
    );

    match state.extractor.extract(&req.transcript).await {
        Ok(key_points) => {
            info!(
                "Extraction finished (request={}, count={})",
                request_id,
                key_points.len()
            );
            (
                StatusCode::OK,
                Json(ExtractKeyPointsResponse {
                    request_id,
                    extracted_at: Utc::now(),
                    count: key_points.len(),
                    key_points,
                }),
            )
                .into_response()
        }
        Err(e) => {
            error!("Key point extraction failed (request={}): {}", request_id, e);
            // Provider and credential failures are upstream failures
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: format!("Key point extraction failed: {}", e),
                }),
            )
                .into_response()
        }
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
