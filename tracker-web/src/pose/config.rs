/// Tunable thresholds for checkpoint evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionConfig {
    /// Landmarks reporting a visibility below this are treated as hidden
    pub visibility_floor: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            visibility_floor: 0.8,
        }
    }
}
