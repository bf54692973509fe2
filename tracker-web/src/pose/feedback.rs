//! Per-frame form feedback
//!
//! Grades every checkpoint (both phases) against the current frame and
//! collects a coaching message plus the joints and bones to highlight.

use serde::Serialize;

use super::checkpoint::{Checkpoint, CheckpointStatus};
use super::config::DetectionConfig;
use super::landmark::{landmark_index, PoseFrame};

pub const MSG_NOT_VISIBLE: &str = "Ensure full body is visible!";
pub const MSG_GREAT_REP: &str = "Great Rep!";
pub const MSG_GOOD_FORM: &str = "Good form!";
pub const MSG_ADJUST: &str = "Adjust your position.";

/// Form assessment for one frame
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFeedback {
    /// Every checkpoint is visible and in range
    pub form_correct: bool,
    pub message: Option<String>,
    /// MediaPipe indices of landmarks involved in failing checkpoints
    pub highlight_joints: Vec<usize>,
    /// MediaPipe index pairs of bones in out-of-range checkpoints
    pub highlight_connections: Vec<(usize, usize)>,
}

impl FormFeedback {
    pub fn evaluate(checkpoints: &[Checkpoint], frame: &PoseFrame, config: &DetectionConfig) -> Self {
        let mut feedback = Self {
            form_correct: true,
            ..Self::default()
        };

        for cp in checkpoints {
            let status = cp.evaluate(frame, config);
            match status {
                CheckpointStatus::InRange { .. } => continue,
                CheckpointStatus::Hidden => {
                    if feedback.message.is_none() {
                        feedback.message = Some(MSG_NOT_VISIBLE.to_string());
                    }
                }
                CheckpointStatus::TooShallow { angle } => {
                    feedback.message = Some(format!("Too shallow at {}! Angle: {:.0}°", cp.keypoint2, angle));
                    feedback.mark_bones(cp);
                }
                CheckpointStatus::TooDeep { angle } => {
                    feedback.message = Some(format!(
                        "Too deep/overextended at {}! Angle: {:.0}°",
                        cp.keypoint2, angle
                    ));
                    feedback.mark_bones(cp);
                }
            }
            feedback.form_correct = false;
            feedback.mark_joints(cp);
        }

        feedback
    }

    /// Message to show after the rep counter has seen the same frame
    pub fn display_message(&self, rep_completed: bool) -> String {
        if rep_completed {
            MSG_GREAT_REP.to_string()
        } else if self.form_correct && self.message.is_none() {
            MSG_GOOD_FORM.to_string()
        } else if let Some(msg) = &self.message {
            msg.clone()
        } else {
            MSG_ADJUST.to_string()
        }
    }

    fn mark_joints(&mut self, cp: &Checkpoint) {
        for idx in cp.keypoints().iter().filter_map(|name| landmark_index(name)) {
            if !self.highlight_joints.contains(&idx) {
                self.highlight_joints.push(idx);
            }
        }
    }

    fn mark_bones(&mut self, cp: &Checkpoint) {
        let [p1, p2, p3] = cp.keypoints().map(landmark_index);
        for bone in [(p1, p2), (p2, p3)] {
            if let (Some(a), Some(b)) = bone {
                if !self.highlight_connections.contains(&(a, b)) {
                    self.highlight_connections.push((a, b));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::checkpoint::Phase;
    use crate::pose::landmark::Landmark;

    fn arm_frame() -> PoseFrame {
        // 90° at the right elbow
        [
            ("right_shoulder", Landmark::new(0.5, 0.3)),
            ("right_elbow", Landmark::new(0.5, 0.5)),
            ("right_wrist", Landmark::new(0.7, 0.5)),
        ]
        .into_iter()
        .collect()
    }

    fn elbow(target: f64, phase: Phase) -> Checkpoint {
        Checkpoint::new("right_shoulder", "right_elbow", "right_wrist", target, 10.0, phase)
    }

    #[test]
    fn test_all_in_range() {
        let fb = FormFeedback::evaluate(&[elbow(90.0, Phase::Down)], &arm_frame(), &DetectionConfig::default());
        assert!(fb.form_correct);
        assert_eq!(fb.message, None);
        assert!(fb.highlight_joints.is_empty());
        assert_eq!(fb.display_message(false), MSG_GOOD_FORM);
        assert_eq!(fb.display_message(true), MSG_GREAT_REP);
    }

    #[test]
    fn test_too_shallow() {
        let fb = FormFeedback::evaluate(&[elbow(160.0, Phase::Up)], &arm_frame(), &DetectionConfig::default());
        assert!(!fb.form_correct);
        assert_eq!(fb.message.as_deref(), Some("Too shallow at right_elbow! Angle: 90°"));
        assert_eq!(fb.highlight_joints, vec![12, 14, 16]);
        assert_eq!(fb.highlight_connections, vec![(12, 14), (14, 16)]);
    }

    #[test]
    fn test_too_deep() {
        let fb = FormFeedback::evaluate(&[elbow(40.0, Phase::Down)], &arm_frame(), &DetectionConfig::default());
        assert_eq!(
            fb.message.as_deref(),
            Some("Too deep/overextended at right_elbow! Angle: 90°")
        );
        assert_eq!(fb.display_message(false), "Too deep/overextended at right_elbow! Angle: 90°");
    }

    #[test]
    fn test_hidden_message_does_not_override_angle_message() {
        let hidden = Checkpoint::new("left_hip", "left_knee", "left_ankle", 90.0, 10.0, Phase::Down);
        let checkpoints = [elbow(160.0, Phase::Up), hidden];
        let fb = FormFeedback::evaluate(&checkpoints, &arm_frame(), &DetectionConfig::default());
        assert_eq!(fb.message.as_deref(), Some("Too shallow at right_elbow! Angle: 90°"));
        // Hidden checkpoints highlight joints but not bones
        assert_eq!(fb.highlight_joints, vec![12, 14, 16, 23, 25, 27]);
        assert_eq!(fb.highlight_connections.len(), 2);
    }

    #[test]
    fn test_angle_message_overrides_hidden_message() {
        let hidden = Checkpoint::new("left_hip", "left_knee", "left_ankle", 90.0, 10.0, Phase::Down);
        let checkpoints = [hidden, elbow(40.0, Phase::Up)];
        let fb = FormFeedback::evaluate(&checkpoints, &arm_frame(), &DetectionConfig::default());
        assert!(fb.message.unwrap().starts_with("Too deep/overextended"));
    }

    #[test]
    fn test_only_hidden() {
        let fb = FormFeedback::evaluate(&[elbow(90.0, Phase::Down)], &PoseFrame::new(), &DetectionConfig::default());
        assert!(!fb.form_correct);
        assert_eq!(fb.display_message(false), MSG_NOT_VISIBLE);
    }

    #[test]
    fn test_duplicate_joints_collapse() {
        let checkpoints = [elbow(160.0, Phase::Up), elbow(20.0, Phase::Down)];
        let fb = FormFeedback::evaluate(&checkpoints, &arm_frame(), &DetectionConfig::default());
        assert_eq!(fb.highlight_joints.len(), 3);
        assert_eq!(fb.highlight_connections.len(), 2);
    }

    #[test]
    fn test_unknown_names_are_not_highlighted() {
        let cp = Checkpoint::new("nose", "chin", "neck", 90.0, 10.0, Phase::Down);
        let fb = FormFeedback::evaluate(&[cp], &arm_frame(), &DetectionConfig::default());
        assert!(!fb.form_correct);
        assert!(fb.highlight_joints.is_empty());
    }

    #[test]
    fn test_adjust_fallback() {
        let fb = FormFeedback::default();
        assert_eq!(fb.display_message(false), MSG_ADJUST);
    }
}
