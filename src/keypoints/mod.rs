//! Key-point extraction
//!
//! This module turns a timestamped transcript into a list of screenshot
//! moments:
//! - `KeyPointExtractor` drives the model call
//! - `sanitize_key_points` validates and normalizes the model's raw output
//! - `KeyPoint` is the resulting timestamp/reason pair

mod extractor;
mod sanitize;
mod types;

pub use extractor::KeyPointExtractor;
pub use sanitize::sanitize_key_points;
pub use types::KeyPoint;
