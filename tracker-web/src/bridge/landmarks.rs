//! Landmark storage and JS bridge
//!
//! Receives MediaPipe pose landmarks from JavaScript and keeps the latest
//! frame for the rep counter and overlay helpers to read.

use std::cell::RefCell;

use log::warn;
use wasm_bindgen::prelude::*;

use crate::error::{Result, TrackerError};
use crate::pose::{angle_between, Landmark, PoseFrame, FLAT_FRAME_LEN};

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static LANDMARKS: RefCell<Option<PoseFrame>> = RefCell::new(None);
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from JavaScript with a flat Float64Array of 132 values
/// (33 landmarks × x, y, z, visibility). Pass a negative visibility when
/// the estimator did not report one.
#[wasm_bindgen]
pub fn update_landmarks(data: &[f64]) -> std::result::Result<(), JsValue> {
    store_landmarks(data)?;
    Ok(())
}

/// Drop the stored frame (pose lost or camera stopped)
#[wasm_bindgen]
pub fn clear_landmarks() {
    LANDMARKS.with(|store| *store.borrow_mut() = None);
}

/// Angle in degrees at (x2, y2) formed with (x1, y1) and (x3, y3)
#[wasm_bindgen]
pub fn joint_angle(x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> f64 {
    angle_between(&Landmark::new(x1, y1), &Landmark::new(x2, y2), &Landmark::new(x3, y3))
}

/// Angle at `vertex` in the stored frame, for overlay labels
#[wasm_bindgen]
pub fn joint_angle_by_name(p1: &str, vertex: &str, p3: &str) -> Option<f64> {
    LANDMARKS.with(|store| {
        let store = store.borrow();
        let frame = store.as_ref()?;
        Some(angle_between(frame.get(p1)?, frame.get(vertex)?, frame.get(p3)?))
    })
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

pub(crate) fn store_landmarks(data: &[f64]) -> Result<()> {
    let frame = PoseFrame::from_flat(data).ok_or_else(|| {
        warn!("Invalid landmark data length: {} (expected {})", data.len(), FLAT_FRAME_LEN);
        TrackerError::FrameLength {
            got: data.len(),
            expected: FLAT_FRAME_LEN,
        }
    })?;

    LANDMARKS.with(|store| *store.borrow_mut() = Some(frame));
    Ok(())
}

/// Latest frame, if any has arrived
pub fn current_frame() -> Option<PoseFrame> {
    LANDMARKS.with(|store| store.borrow().clone())
}

/// Check if we have landmark data
pub fn has_landmarks() -> bool {
    LANDMARKS.with(|store| store.borrow().is_some())
}
