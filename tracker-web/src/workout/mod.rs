//! Workout module - exercise definitions and the timed session around them
//!
//! Re-exports only. All logic in submodules.

mod config;
mod exercise;
mod session;

pub use config::WorkoutConfig;
pub use exercise::Exercise;
pub use session::{FrameUpdate, WorkoutPhase, WorkoutReport, WorkoutSession, MSG_WORKOUT_STARTED};
