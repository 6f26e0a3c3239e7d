use crate::keypoints::KeyPointExtractor;
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Key-point extractor shared across requests
    pub extractor: Arc<KeyPointExtractor>,
}

impl AppState {
    pub fn new(extractor: KeyPointExtractor) -> Self {
        Self {
            extractor: Arc::new(extractor),
        }
    }
}
