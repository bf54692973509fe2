//! Tiers module - grading a rep count into skill tiers
//!
//! Re-exports only. All logic in submodules.

mod classify;
mod tier;

pub use classify::get_tier_info;
pub use tier::{ExerciseTier, TierInfo, UNRANKED_TIER_NAME};
