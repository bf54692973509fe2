//! Pose module - joint angles, checkpoints and rep detection
//!
//! Re-exports only. All logic in submodules.

mod angles;
mod checkpoint;
mod config;
mod feedback;
mod landmark;
mod rep_counter;

pub use angles::angle_between;
pub use checkpoint::{Checkpoint, CheckpointStatus, Phase};
pub use config::DetectionConfig;
pub use feedback::{FormFeedback, MSG_ADJUST, MSG_GOOD_FORM, MSG_GREAT_REP, MSG_NOT_VISIBLE};
pub use landmark::{
    landmark_index, landmark_name, Landmark, PoseFrame, FLAT_FRAME_LEN, POSE_LANDMARK_COUNT,
    POSE_VOCABULARY, VALUES_PER_LANDMARK,
};
pub use rep_counter::RepCounter;
