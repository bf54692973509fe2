//! Landmark types and the MediaPipe Pose vocabulary
//!
//! A `PoseFrame` maps landmark names to points for a single video frame.
//! Frames arrive from JavaScript as a flat array of MediaPipe's 33 landmarks.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// LANDMARK VOCABULARY (MediaPipe Pose - 33 total)
// ============================================================================

/// Number of landmarks MediaPipe Pose emits per frame
pub const POSE_LANDMARK_COUNT: usize = 33;

/// Values per landmark in the flat buffer: x, y, z, visibility
pub const VALUES_PER_LANDMARK: usize = 4;

/// Expected length of a flat landmark buffer
pub const FLAT_FRAME_LEN: usize = POSE_LANDMARK_COUNT * VALUES_PER_LANDMARK;

/// Landmarks exercises can reference, with their MediaPipe indices
pub const POSE_VOCABULARY: [(&str, usize); 12] = [
    ("left_shoulder", 11),
    ("right_shoulder", 12),
    ("left_elbow", 13),
    ("right_elbow", 14),
    ("left_wrist", 15),
    ("right_wrist", 16),
    ("left_hip", 23),
    ("right_hip", 24),
    ("left_knee", 25),
    ("right_knee", 26),
    ("left_ankle", 27),
    ("right_ankle", 28),
];

/// MediaPipe index for a vocabulary name
pub fn landmark_index(name: &str) -> Option<usize> {
    POSE_VOCABULARY
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, idx)| *idx)
}

/// Vocabulary name for a MediaPipe index
pub fn landmark_name(index: usize) -> Option<&'static str> {
    POSE_VOCABULARY
        .iter()
        .find(|(_, idx)| *idx == index)
        .map(|(n, _)| *n)
}

// ============================================================================
// LANDMARK DATA STRUCTURES
// ============================================================================

/// A single landmark point (normalized image coordinates)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64, // 0-1 normalized
    pub y: f64, // 0-1 normalized
    pub z: f64, // Relative depth, ignored by angle math
    /// Estimator confidence in [0, 1]; `None` when the estimator gave none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,
}

impl Landmark {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0, visibility: None }
    }

    pub fn with_visibility(mut self, visibility: f64) -> Self {
        self.visibility = Some(visibility);
        self
    }

    /// Absent visibility counts as visible
    pub fn is_visible(&self, floor: f64) -> bool {
        match self.visibility {
            Some(v) => v >= floor,
            None => true,
        }
    }
}

/// Named landmarks for one video frame
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoseFrame {
    landmarks: HashMap<String, Landmark>,
}

impl PoseFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, landmark: Landmark) {
        self.landmarks.insert(name.into(), landmark);
    }

    pub fn get(&self, name: &str) -> Option<&Landmark> {
        self.landmarks.get(name)
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// Build a frame from MediaPipe's flat `[x, y, z, visibility] x 33` buffer.
    ///
    /// Only vocabulary landmarks are kept. A negative visibility means the
    /// estimator reported none. Returns `None` on a wrong-sized buffer.
    pub fn from_flat(data: &[f64]) -> Option<Self> {
        if data.len() != FLAT_FRAME_LEN {
            return None;
        }

        let mut frame = Self::new();
        for (name, idx) in POSE_VOCABULARY.iter() {
            let base = idx * VALUES_PER_LANDMARK;
            let visibility = data[base + 3];
            frame.insert(
                *name,
                Landmark {
                    x: data[base],
                    y: data[base + 1],
                    z: data[base + 2],
                    visibility: (visibility >= 0.0).then_some(visibility),
                },
            );
        }
        Some(frame)
    }
}

impl<S: Into<String>> FromIterator<(S, Landmark)> for PoseFrame {
    fn from_iter<I: IntoIterator<Item = (S, Landmark)>>(iter: I) -> Self {
        Self {
            landmarks: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
