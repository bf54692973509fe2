/// Workout timing, in whole seconds of host timer ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkoutConfig {
    /// Get-ready countdown before counting starts
    pub countdown_secs: u32,

    /// Length of the timed set
    pub duration_secs: u32,
}

impl Default for WorkoutConfig {
    fn default() -> Self {
        Self {
            countdown_secs: 3,
            duration_secs: 60,
        }
    }
}
