//! Error types for the bridge layer
//!
//! The core computations never fail. Errors only come from data crossing the
//! JS boundary or lifecycle calls made in the wrong order.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum TrackerError {
    /// Exercise or tier JSON did not match the expected shape
    #[error("Invalid definition: {0}")]
    Definition(#[from] serde_json::Error),

    /// Flat landmark buffer of the wrong size
    #[error("Invalid landmark data length: {got} (expected {expected})")]
    FrameLength { got: usize, expected: usize },

    /// Operation needs a loaded exercise
    #[error("No exercise loaded")]
    NoExercise,

    /// Result could not be encoded as JSON for JavaScript
    #[error("Encode error: {0}")]
    Encode(String),

    /// Lifecycle call in the wrong workout phase
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;

impl From<TrackerError> for JsValue {
    fn from(err: TrackerError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
