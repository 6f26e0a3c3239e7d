pub mod config;
pub mod http;
pub mod keypoints;
pub mod llm;

pub use config::Config;
pub use http::{create_router, AppState};
pub use keypoints::{sanitize_key_points, KeyPoint, KeyPointExtractor};
pub use llm::{ChatModel, KeyPointModel};
