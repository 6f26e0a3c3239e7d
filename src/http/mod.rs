//! HTTP API server for external callers (recording pipeline, editor plugins)
//!
//! This module provides a REST API around key-point extraction:
//! - POST /recordings/keypoints - Extract key points from a transcript
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
