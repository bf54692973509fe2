//! Workout session lifecycle
//!
//! Idle → Countdown → Active → Completed. The host drives `tick()` once per
//! second and `process_frame()` once per pose frame.

use log::info;
use serde::Serialize;

use super::config::WorkoutConfig;
use super::exercise::Exercise;
use crate::error::{Result, TrackerError};
use crate::pose::{DetectionConfig, FormFeedback, PoseFrame, RepCounter};
use crate::tiers::{get_tier_info, TierInfo};

pub const MSG_WORKOUT_STARTED: &str = "Workout started! Do your first rep.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutPhase {
    Idle,
    Countdown,
    Active,
    Completed,
}

impl WorkoutPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutPhase::Idle => "idle",
            WorkoutPhase::Countdown => "countdown",
            WorkoutPhase::Active => "active",
            WorkoutPhase::Completed => "completed",
        }
    }
}

/// Everything the UI needs after one processed frame
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameUpdate {
    pub rep_count: u32,
    pub message: String,
    pub form_correct: bool,
    pub highlight_joints: Vec<usize>,
    pub highlight_connections: Vec<(usize, usize)>,
    /// `None` when the exercise has no tiers
    pub tier: Option<TierInfo>,
}

/// Summary of a workout that ran to the end of its timer
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutReport {
    pub exercise_name: String,
    /// Seconds spent in the active phase
    pub duration_secs: u32,
    pub total_reps: u32,
    pub tier_name: String,
    pub tier_min_reps: u32,
    pub tier_max_reps: Option<u32>,
}

/// One timed set of one exercise
pub struct WorkoutSession {
    exercise: Exercise,
    config: WorkoutConfig,
    counter: RepCounter,
    phase: WorkoutPhase,
    countdown_remaining: u32,
    elapsed_secs: u32,
    message: String,
    tier: Option<TierInfo>,
}

impl WorkoutSession {
    pub fn new(exercise: Exercise, config: WorkoutConfig, detection: DetectionConfig) -> Self {
        let counter = RepCounter::with_config(exercise.checkpoints.clone(), detection);
        Self {
            exercise,
            config,
            counter,
            phase: WorkoutPhase::Idle,
            countdown_remaining: 0,
            elapsed_secs: 0,
            message: String::new(),
            tier: None,
        }
    }

    /// Start the get-ready countdown
    pub fn begin(&mut self) -> Result<()> {
        match self.phase {
            WorkoutPhase::Idle | WorkoutPhase::Completed => {}
            other => {
                return Err(TrackerError::InvalidState(format!(
                    "cannot begin a workout while {}",
                    other.as_str()
                )))
            }
        }

        info!("{}: countdown from {}s", self.exercise.name, self.config.countdown_secs);
        self.phase = WorkoutPhase::Countdown;
        self.countdown_remaining = self.config.countdown_secs;
        self.elapsed_secs = 0;
        if self.countdown_remaining == 0 {
            self.enter_active();
        }
        Ok(())
    }

    /// Advance the session clock by one second
    ///
    /// Returns the report when this tick ends the workout.
    pub fn tick(&mut self) -> Option<WorkoutReport> {
        match self.phase {
            WorkoutPhase::Countdown => {
                self.countdown_remaining = self.countdown_remaining.saturating_sub(1);
                if self.countdown_remaining == 0 {
                    self.enter_active();
                }
                None
            }
            WorkoutPhase::Active => {
                self.elapsed_secs += 1;
                if self.elapsed_secs >= self.config.duration_secs {
                    Some(self.complete())
                } else {
                    None
                }
            }
            WorkoutPhase::Idle | WorkoutPhase::Completed => None,
        }
    }

    /// Grade and count one pose frame. Ignored outside the active phase.
    pub fn process_frame(&mut self, frame: &PoseFrame) -> Option<FrameUpdate> {
        if self.phase != WorkoutPhase::Active {
            return None;
        }

        let feedback = FormFeedback::evaluate(self.counter.checkpoints(), frame, self.counter.config());
        let before = self.counter.rep_count();
        let rep_count = self.counter.detect_rep(frame);

        self.message = feedback.display_message(rep_count != before);
        self.refresh_tier();

        Some(FrameUpdate {
            rep_count,
            message: self.message.clone(),
            form_correct: feedback.form_correct,
            highlight_joints: feedback.highlight_joints,
            highlight_connections: feedback.highlight_connections,
            tier: self.tier.clone(),
        })
    }

    /// End early. Results of an unfinished workout are discarded.
    pub fn stop(&mut self) -> Result<()> {
        match self.phase {
            WorkoutPhase::Countdown | WorkoutPhase::Active => {
                info!(
                    "{}: stopped early after {}s, results discarded",
                    self.exercise.name, self.elapsed_secs
                );
                self.phase = WorkoutPhase::Completed;
                Ok(())
            }
            other => Err(TrackerError::InvalidState(format!(
                "no workout running (phase {})",
                other.as_str()
            ))),
        }
    }

    fn enter_active(&mut self) {
        self.phase = WorkoutPhase::Active;
        self.counter.reset();
        self.elapsed_secs = 0;
        self.message = MSG_WORKOUT_STARTED.to_string();
        self.tier = None;
        self.refresh_tier();
        info!("{}: workout active for {}s", self.exercise.name, self.config.duration_secs);
    }

    fn complete(&mut self) -> WorkoutReport {
        self.phase = WorkoutPhase::Completed;
        let report = WorkoutReport {
            exercise_name: self.exercise.name.clone(),
            duration_secs: self.elapsed_secs,
            total_reps: self.counter.rep_count(),
            tier_name: self.tier.as_ref().map(|t| t.current_tier_name.clone()).unwrap_or_default(),
            tier_min_reps: self.tier.as_ref().map_or(0, |t| t.tier_min_reps),
            tier_max_reps: self.tier.as_ref().and_then(|t| t.tier_max_reps),
        };
        info!(
            "{}: completed with {} reps ({})",
            report.exercise_name, report.total_reps, report.tier_name
        );
        report
    }

    fn refresh_tier(&mut self) {
        if self.exercise.has_tiers() {
            self.tier = Some(get_tier_info(self.counter.rep_count(), &self.exercise.tiers));
        }
    }

    pub fn phase(&self) -> WorkoutPhase {
        self.phase
    }

    pub fn rep_count(&self) -> u32 {
        self.counter.rep_count()
    }

    pub fn counter(&self) -> &RepCounter {
        &self.counter
    }

    /// Direct counter access for hosts that drive detection themselves
    pub fn counter_mut(&mut self) -> &mut RepCounter {
        &mut self.counter
    }

    pub fn countdown_remaining(&self) -> u32 {
        self.countdown_remaining
    }

    pub fn time_remaining(&self) -> u32 {
        match self.phase {
            WorkoutPhase::Idle | WorkoutPhase::Countdown => self.config.duration_secs,
            WorkoutPhase::Active => self.config.duration_secs.saturating_sub(self.elapsed_secs),
            WorkoutPhase::Completed => 0,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn tier(&self) -> Option<&TierInfo> {
        self.tier.as_ref()
    }
}
