//! Tier definitions and classification results

use serde::{Deserialize, Serialize};

/// Name reported when no tier matches
pub const UNRANKED_TIER_NAME: &str = "N/A";

/// Skill tier covering `[min_reps, max_reps]` inclusive
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseTier {
    pub name: String,
    pub min_reps: u32,
    /// `None` for the unbounded top tier
    pub max_reps: Option<u32>,
}

impl ExerciseTier {
    pub fn new(name: &str, min_reps: u32, max_reps: Option<u32>) -> Self {
        Self {
            name: name.to_string(),
            min_reps,
            max_reps,
        }
    }

    pub fn contains(&self, reps: u32) -> bool {
        reps >= self.min_reps && self.max_reps.map_or(true, |max| reps <= max)
    }
}

/// Active tier and progress through it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierInfo {
    pub current_tier_name: String,
    pub tier_min_reps: u32,
    pub tier_max_reps: Option<u32>,
    /// 0.0 at the bottom of the tier, 1.0 at the top
    pub progress_in_tier: f64,
}

impl TierInfo {
    /// Result for an empty tier list
    pub fn unranked() -> Self {
        Self {
            current_tier_name: UNRANKED_TIER_NAME.to_string(),
            tier_min_reps: 0,
            tier_max_reps: Some(0),
            progress_in_tier: 0.0,
        }
    }

    pub fn is_unranked(&self) -> bool {
        self.current_tier_name == UNRANKED_TIER_NAME
    }
}
