//! Workout bridge - owns the active session and exposes it to JavaScript
//!
//! JS loads an exercise once, then calls `workout_tick()` every second and
//! `process_pose_frame()` after every `update_landmarks()`.

use std::cell::RefCell;

use log::info;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::landmarks::current_frame;
use crate::error::{Result, TrackerError};
use crate::pose::DetectionConfig;
use crate::tiers::{get_tier_info, ExerciseTier};
use crate::workout::{Exercise, WorkoutConfig, WorkoutSession};

/// Bridge state: configs plus the session built from the last loaded exercise
#[derive(Default)]
struct BridgeState {
    session: Option<WorkoutSession>,
    workout_config: WorkoutConfig,
    detection_config: DetectionConfig,
}

thread_local! {
    static BRIDGE_STATE: RefCell<BridgeState> = RefCell::new(BridgeState::default());
}

fn with_session<T>(f: impl FnOnce(&mut WorkoutSession) -> Result<T>) -> Result<T> {
    BRIDGE_STATE.with(|state_cell| {
        let mut state = state_cell.borrow_mut();
        let session = state.session.as_mut().ok_or(TrackerError::NoExercise)?;
        f(session)
    })
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| TrackerError::Encode(e.to_string()))
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

pub(crate) fn load(json: &str) -> Result<()> {
    let exercise = Exercise::from_json(json)?;
    info!(
        "Loaded exercise '{}' ({} checkpoints, {} tiers)",
        exercise.name,
        exercise.checkpoints.len(),
        exercise.tiers.len()
    );
    BRIDGE_STATE.with(|state_cell| {
        let mut state = state_cell.borrow_mut();
        let session = WorkoutSession::new(exercise, state.workout_config, state.detection_config);
        state.session = Some(session);
    });
    Ok(())
}

pub(crate) fn detect_rep_on_current_frame() -> Result<u32> {
    with_session(|session| {
        let counter = session.counter_mut();
        Ok(match current_frame() {
            Some(frame) => counter.detect_rep(&frame),
            None => counter.rep_count(),
        })
    })
}

pub(crate) fn reset_counter() -> Result<()> {
    with_session(|session| {
        session.counter_mut().reset();
        Ok(())
    })
}

pub(crate) fn set_configs(workout: Option<WorkoutConfig>, detection: Option<DetectionConfig>) {
    BRIDGE_STATE.with(|state_cell| {
        let mut state = state_cell.borrow_mut();
        if let Some(workout) = workout {
            state.workout_config = workout;
        }
        if let Some(detection) = detection {
            state.detection_config = detection;
        }
    });
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Load an exercise definition (backend JSON) and create a fresh session
#[wasm_bindgen]
pub fn load_exercise(json: &str) -> std::result::Result<(), JsValue> {
    load(json)?;
    Ok(())
}

/// Start the countdown for the loaded exercise
#[wasm_bindgen]
pub fn begin_workout() -> std::result::Result<(), JsValue> {
    with_session(|session| session.begin())?;
    Ok(())
}

/// End the workout early; results are discarded
#[wasm_bindgen]
pub fn stop_workout() -> std::result::Result<(), JsValue> {
    with_session(|session| session.stop())?;
    Ok(())
}

/// Advance the session by one second. Returns report JSON when the workout ends.
#[wasm_bindgen]
pub fn workout_tick() -> std::result::Result<Option<String>, JsValue> {
    let report = with_session(|session| Ok(session.tick()))?;
    Ok(report.as_ref().map(to_json).transpose()?)
}

/// Run feedback, rep detection and tiering on the latest landmarks.
/// Returns FrameUpdate JSON, or nothing outside the active phase.
#[wasm_bindgen]
pub fn process_pose_frame() -> std::result::Result<Option<String>, JsValue> {
    let Some(frame) = current_frame() else {
        return Ok(None);
    };
    let update = with_session(|session| Ok(session.process_frame(&frame)))?;
    Ok(update.as_ref().map(to_json).transpose()?)
}

/// Feed the latest landmarks straight to the rep counter
#[wasm_bindgen]
pub fn detect_rep() -> std::result::Result<u32, JsValue> {
    Ok(detect_rep_on_current_frame()?)
}

#[wasm_bindgen]
pub fn get_rep_count() -> u32 {
    with_session(|session| Ok(session.rep_count())).unwrap_or(0)
}

/// Restart the rep cycle without touching the workout clock
#[wasm_bindgen]
pub fn reset_reps() -> std::result::Result<(), JsValue> {
    reset_counter()?;
    Ok(())
}

/// "idle", "countdown", "active", "completed", or "" with no exercise loaded
#[wasm_bindgen]
pub fn workout_phase() -> String {
    with_session(|session| Ok(session.phase().as_str().to_string())).unwrap_or_default()
}

#[wasm_bindgen]
pub fn workout_message() -> String {
    with_session(|session| Ok(session.message().to_string())).unwrap_or_default()
}

#[wasm_bindgen]
pub fn countdown_remaining() -> u32 {
    with_session(|session| Ok(session.countdown_remaining())).unwrap_or(0)
}

#[wasm_bindgen]
pub fn workout_time_remaining() -> u32 {
    with_session(|session| Ok(session.time_remaining())).unwrap_or(0)
}

/// Tier for a rep count against a tier table (JSON array). Stateless.
#[wasm_bindgen]
pub fn tier_info(current_reps: u32, tiers_json: &str) -> std::result::Result<String, JsValue> {
    let tiers: Vec<ExerciseTier> = serde_json::from_str(tiers_json).map_err(TrackerError::from)?;
    Ok(to_json(&get_tier_info(current_reps, &tiers))?)
}

/// Timing for sessions created by later `load_exercise` calls
#[wasm_bindgen]
pub fn configure_workout(countdown_secs: u32, duration_secs: u32) {
    set_configs(
        Some(WorkoutConfig {
            countdown_secs,
            duration_secs,
        }),
        None,
    );
}

/// Visibility floor for sessions created by later `load_exercise` calls
#[wasm_bindgen]
pub fn set_visibility_floor(floor: f64) {
    set_configs(None, Some(DetectionConfig { visibility_floor: floor }));
}
