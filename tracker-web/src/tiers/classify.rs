//! Tier classification
//!
//! Tier ranges are expected to partition the rep counts with no gaps.
//! That is not checked: with gaps or overlaps the first containing tier wins.

use super::tier::{ExerciseTier, TierInfo};

/// Find the tier for `current_reps` and the progress through it
///
/// - Tiers are sorted by `min_reps` first (stable)
/// - Reps below the lowest tier report the lowest tier
/// - No tiers at all → "N/A" with zeroed fields
pub fn get_tier_info(current_reps: u32, tiers: &[ExerciseTier]) -> TierInfo {
    let mut sorted: Vec<&ExerciseTier> = tiers.iter().collect();
    sorted.sort_by_key(|t| t.min_reps);

    let tier = sorted
        .iter()
        .find(|t| t.contains(current_reps))
        .or_else(|| sorted.first().filter(|t| current_reps < t.min_reps));

    let Some(tier) = tier else {
        return TierInfo::unranked();
    };

    TierInfo {
        current_tier_name: tier.name.clone(),
        tier_min_reps: tier.min_reps,
        tier_max_reps: tier.max_reps,
        progress_in_tier: progress(current_reps, tier),
    }
}

fn progress(current_reps: u32, tier: &ExerciseTier) -> f64 {
    let Some(max) = tier.max_reps else {
        // Top tier is always full
        return 1.0;
    };

    let range = max as f64 - tier.min_reps as f64;
    if range > 0.0 {
        ((current_reps as f64 - tier.min_reps as f64) / range).clamp(0.0, 1.0)
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_tiers() -> Vec<ExerciseTier> {
        vec![
            ExerciseTier::new("Beginner", 0, Some(9)),
            ExerciseTier::new("Elite", 10, None),
        ]
    }

    fn five_tiers() -> Vec<ExerciseTier> {
        vec![
            ExerciseTier::new("Beginner", 0, Some(9)),
            ExerciseTier::new("Developing", 10, Some(19)),
            ExerciseTier::new("Competent", 20, Some(29)),
            ExerciseTier::new("Proficient", 30, Some(39)),
            ExerciseTier::new("Elite", 40, None),
        ]
    }

    #[test]
    fn test_bottom_of_first_tier() {
        let info = get_tier_info(0, &two_tiers());
        assert_eq!(info.current_tier_name, "Beginner");
        assert_eq!(info.tier_min_reps, 0);
        assert_eq!(info.tier_max_reps, Some(9));
        assert_eq!(info.progress_in_tier, 0.0);
    }

    #[test]
    fn test_top_of_bounded_tier() {
        let info = get_tier_info(9, &two_tiers());
        assert_eq!(info.current_tier_name, "Beginner");
        assert_eq!(info.progress_in_tier, 1.0);
    }

    #[test]
    fn test_unbounded_tier_is_full() {
        let info = get_tier_info(15, &two_tiers());
        assert_eq!(info.current_tier_name, "Elite");
        assert_eq!(info.tier_min_reps, 10);
        assert_eq!(info.tier_max_reps, None);
        assert_eq!(info.progress_in_tier, 1.0);

        assert_eq!(get_tier_info(10, &two_tiers()).progress_in_tier, 1.0);
    }

    #[test]
    fn test_empty_tiers() {
        let info = get_tier_info(5, &[]);
        assert_eq!(info, TierInfo::unranked());
        assert!(info.is_unranked());
        assert_eq!(info.tier_max_reps, Some(0));
        assert_eq!(info.progress_in_tier, 0.0);
    }

    #[test]
    fn test_midway_progress() {
        let info = get_tier_info(25, &five_tiers());
        assert_eq!(info.current_tier_name, "Competent");
        assert!((info.progress_in_tier - 5.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_unsorted_input() {
        let mut tiers = five_tiers();
        tiers.reverse();
        assert_eq!(get_tier_info(12, &tiers).current_tier_name, "Developing");
        assert_eq!(get_tier_info(40, &tiers).current_tier_name, "Elite");
    }

    #[test]
    fn test_below_lowest_tier_reports_lowest() {
        let tiers = vec![
            ExerciseTier::new("Novice", 5, Some(14)),
            ExerciseTier::new("Expert", 15, None),
        ];
        let info = get_tier_info(2, &tiers);
        assert_eq!(info.current_tier_name, "Novice");
        assert_eq!(info.tier_min_reps, 5);
        assert_eq!(info.progress_in_tier, 0.0);
    }

    #[test]
    fn test_singleton_tier() {
        let tiers = vec![
            ExerciseTier::new("Zero", 0, Some(0)),
            ExerciseTier::new("One", 1, Some(1)),
            ExerciseTier::new("More", 2, None),
        ];
        let info = get_tier_info(1, &tiers);
        assert_eq!(info.current_tier_name, "One");
        assert_eq!(info.progress_in_tier, 1.0);
    }

    #[test]
    fn test_gap_falls_through_to_unranked() {
        // Caller broke the partition: 10..=19 is missing and there is no top tier
        let tiers = vec![
            ExerciseTier::new("Low", 0, Some(9)),
            ExerciseTier::new("High", 20, Some(29)),
        ];
        assert!(get_tier_info(15, &tiers).is_unranked());
        assert!(get_tier_info(30, &tiers).is_unranked());
    }

    #[test]
    fn test_overlap_first_tier_wins() {
        let tiers = vec![
            ExerciseTier::new("A", 0, Some(10)),
            ExerciseTier::new("B", 5, None),
        ];
        assert_eq!(get_tier_info(7, &tiers).current_tier_name, "A");
    }

    #[test]
    fn test_deserialize_null_max() {
        let json = r#"[{"name":"Beginner","minReps":0,"maxReps":9},
                       {"name":"Elite","minReps":10,"maxReps":null}]"#;
        let tiers: Vec<ExerciseTier> = serde_json::from_str(json).unwrap();
        assert_eq!(tiers, two_tiers());
    }
}
