//! Rep Tracker Web - pose-based rep counting for the browser
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! Pose estimation runs in JavaScript (MediaPipe). Rust receives the
//! landmarks, counts reps, grades form and tiers the result.

mod bridge;
mod error;
mod logging;

pub mod pose;
pub mod tiers;
pub mod workout;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::*;
pub use error::{Result, TrackerError};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_hooks() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
    log::info!("✅ Rep tracker ready");
}

/// Change console log verbosity ("error", "warn", "info", "debug", "trace", "off").
/// Returns false for an unknown level name.
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> bool {
    match logging::parse_level(level) {
        Some(filter) => {
            log::set_max_level(filter);
            true
        }
        None => false,
    }
}
