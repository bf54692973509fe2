//! Exercise definitions as served by the backend

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::pose::Checkpoint;
use crate::tiers::ExerciseTier;

/// One exercise with its detection rules and grading table
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub target_muscles: Vec<String>,
    #[serde(default)]
    pub checkpoints: Vec<Checkpoint>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub tiers: Vec<ExerciseTier>,
}

impl Exercise {
    pub fn new(name: &str, checkpoints: Vec<Checkpoint>, tiers: Vec<ExerciseTier>) -> Self {
        Self {
            name: name.to_string(),
            description: String::new(),
            target_muscles: Vec::new(),
            checkpoints,
            instructions: Vec::new(),
            difficulty: String::new(),
            tiers,
        }
    }

    /// Parse a definition; unknown fields (ids, timestamps) are ignored
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn has_tiers(&self) -> bool {
        !self.tiers.is_empty()
    }
}
