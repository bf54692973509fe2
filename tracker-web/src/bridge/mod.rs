//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod landmarks;
mod workout;

pub use landmarks::{
    // WASM entry points
    update_landmarks,
    clear_landmarks,
    joint_angle,
    joint_angle_by_name,
    // Internal API
    current_frame,
    has_landmarks,
};

pub use workout::{
    load_exercise,
    begin_workout,
    stop_workout,
    workout_tick,
    process_pose_frame,
    detect_rep,
    get_rep_count,
    reset_reps,
    workout_phase,
    workout_message,
    countdown_remaining,
    workout_time_remaining,
    tier_info,
    configure_workout,
    set_visibility_floor,
};
