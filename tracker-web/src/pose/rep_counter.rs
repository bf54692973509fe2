//! Two-phase rep detection
//!
//! A rep is a down phase followed by an up phase. A phase is met when every
//! checkpoint tagged with it is in range for the current frame. A single
//! frame is enough to move between phases; there is no debounce.

use log::debug;

use super::checkpoint::{Checkpoint, Phase};
use super::config::DetectionConfig;
use super::landmark::PoseFrame;

/// Rep counter for one exercise in one workout
#[derive(Clone, Debug)]
pub struct RepCounter {
    /// Checkpoint set, fixed for the session
    checkpoints: Vec<Checkpoint>,
    config: DetectionConfig,
    in_down_phase: bool,
    in_up_phase: bool,
    rep_count: u32,
}

impl RepCounter {
    pub fn new(checkpoints: Vec<Checkpoint>) -> Self {
        Self::with_config(checkpoints, DetectionConfig::default())
    }

    pub fn with_config(checkpoints: Vec<Checkpoint>, config: DetectionConfig) -> Self {
        Self {
            checkpoints,
            config,
            in_down_phase: false,
            in_up_phase: false,
            rep_count: 0,
        }
    }

    /// Process one pose frame, returns the rep count after it
    ///
    /// Transitions:
    /// - not in down, down met → enter down (clears up)
    /// - in down, not in up, up met → enter up, count a rep
    ///
    /// The down check wins when both phases are met in the same frame.
    pub fn detect_rep(&mut self, frame: &PoseFrame) -> u32 {
        let down_met = self.phase_met(Phase::Down, frame);
        let up_met = self.phase_met(Phase::Up, frame);

        if down_met && !self.in_down_phase {
            self.in_down_phase = true;
            self.in_up_phase = false;
            debug!("rep cycle: entered down phase");
        } else if up_met && self.in_down_phase && !self.in_up_phase {
            self.in_up_phase = true;
            self.in_down_phase = false;
            self.rep_count += 1;
            debug!("rep cycle: entered up phase, rep {}", self.rep_count);
        }

        self.rep_count
    }

    /// Phase with no checkpoints is vacuously met
    fn phase_met(&self, phase: Phase, frame: &PoseFrame) -> bool {
        self.checkpoints
            .iter()
            .filter(|cp| cp.phase == phase)
            .all(|cp| cp.is_satisfied(frame, &self.config))
    }

    pub fn rep_count(&self) -> u32 {
        self.rep_count
    }

    pub fn in_down_phase(&self) -> bool {
        self.in_down_phase
    }

    pub fn in_up_phase(&self) -> bool {
        self.in_up_phase
    }

    pub fn checkpoints(&self) -> &[Checkpoint] {
        &self.checkpoints
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Reset counter state, keeps the checkpoint set
    pub fn reset(&mut self) {
        self.in_down_phase = false;
        self.in_up_phase = false;
        self.rep_count = 0;
    }
}
