//! Crate-wide error type

use wasm_bindgen::JsValue;

/// Result type alias for the pose challenge core
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the pose challenge core
///
/// Pose comparison and timer ticks never fail; these cover malformed
/// input from JavaScript and rejected user actions.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid landmark data length: {0} (expected 99)")]
    LandmarkLength(usize),

    #[error("Pose index {index} out of range (sequence has {len} poses)")]
    PoseIndex { index: usize, len: usize },

    #[error("Invalid target hold time: {0}")]
    TargetTime(f64),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Please enter your name")]
    EmptyPlayerName,

    #[error("Reward claim not allowed: {0}")]
    ClaimNotAllowed(&'static str),

    #[error("Unexpected reward callback: {0}")]
    RewardSequence(&'static str),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<Error> for JsValue {
    fn from(err: Error) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
