//! Exercise checkpoints - angle rules tied to a movement phase
//!
//! A checkpoint asks for the angle at `keypoint2` (formed with `keypoint1`
//! and `keypoint3`) to sit within `tolerance` degrees of `target_angle`.

use serde::{Deserialize, Serialize};

use super::angles::angle_between;
use super::config::DetectionConfig;
use super::landmark::PoseFrame;

/// Movement phase a checkpoint belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Up,
    Down,
}

/// Angle rule for one joint during one phase
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkpoint {
    pub keypoint1: String,
    /// Vertex of the measured angle
    pub keypoint2: String,
    pub keypoint3: String,
    /// Degrees
    pub target_angle: f64,
    /// Degrees either side of `target_angle`
    pub tolerance: f64,
    pub phase: Phase,
}

/// Outcome of evaluating a checkpoint against a frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CheckpointStatus {
    /// A landmark is missing or below the visibility floor
    Hidden,
    InRange { angle: f64 },
    /// Angle below target by more than the tolerance
    TooShallow { angle: f64 },
    /// Angle above target by more than the tolerance
    TooDeep { angle: f64 },
}

impl CheckpointStatus {
    pub fn is_satisfied(&self) -> bool {
        matches!(self, CheckpointStatus::InRange { .. })
    }

    pub fn angle(&self) -> Option<f64> {
        match self {
            CheckpointStatus::Hidden => None,
            CheckpointStatus::InRange { angle }
            | CheckpointStatus::TooShallow { angle }
            | CheckpointStatus::TooDeep { angle } => Some(*angle),
        }
    }
}

impl Checkpoint {
    pub fn new(
        keypoint1: &str,
        keypoint2: &str,
        keypoint3: &str,
        target_angle: f64,
        tolerance: f64,
        phase: Phase,
    ) -> Self {
        Self {
            keypoint1: keypoint1.to_string(),
            keypoint2: keypoint2.to_string(),
            keypoint3: keypoint3.to_string(),
            target_angle,
            tolerance,
            phase,
        }
    }

    /// Landmark names in order p1, vertex, p3
    pub fn keypoints(&self) -> [&str; 3] {
        [&self.keypoint1, &self.keypoint2, &self.keypoint3]
    }

    /// Evaluate against a frame. Never fails: missing data reads as `Hidden`.
    pub fn evaluate(&self, frame: &PoseFrame, config: &DetectionConfig) -> CheckpointStatus {
        let (Some(p1), Some(p2), Some(p3)) = (
            frame.get(&self.keypoint1),
            frame.get(&self.keypoint2),
            frame.get(&self.keypoint3),
        ) else {
            return CheckpointStatus::Hidden;
        };

        let floor = config.visibility_floor;
        if !(p1.is_visible(floor) && p2.is_visible(floor) && p3.is_visible(floor)) {
            return CheckpointStatus::Hidden;
        }

        let angle = angle_between(p1, p2, p3);
        if (angle - self.target_angle).abs() <= self.tolerance {
            CheckpointStatus::InRange { angle }
        } else if angle < self.target_angle {
            CheckpointStatus::TooShallow { angle }
        } else {
            CheckpointStatus::TooDeep { angle }
        }
    }

    pub fn is_satisfied(&self, frame: &PoseFrame, config: &DetectionConfig) -> bool {
        self.evaluate(frame, config).is_satisfied()
    }
}
