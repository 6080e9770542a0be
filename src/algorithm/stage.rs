//! Demographic transition stage classification
//!
//! Birth and death rates are not part of the pyramid data, so both are
//! approximated from the age structure: the youth share stands in for the
//! birth rate and the elderly share for the death rate.

use std::fmt;

use serde::Serialize;

use crate::algorithm::world::percent;
use crate::models::YearSnapshot;
use crate::models::age_group::{is_elderly_range, is_youth_range, sum_totals};

const BIRTH_RATE_PER_YOUTH_PERCENT: f64 = 3.33;
const DEATH_RATE_PER_ELDERLY_PERCENT: f64 = 0.8;

/// Stage of the demographic transition model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DemographicStage {
    /// Stage number, 1 to 5
    pub stage: u8,
    pub name: &'static str,
}

impl DemographicStage {
    pub const PRE_TRANSITION: Self = Self {
        stage: 1,
        name: "Stage 1: Pre-Transition",
    };
    pub const EARLY_TRANSITION: Self = Self {
        stage: 2,
        name: "Stage 2: Early Transition",
    };
    pub const LATE_TRANSITION: Self = Self {
        stage: 3,
        name: "Stage 3: Late Transition",
    };
    pub const POST_TRANSITION: Self = Self {
        stage: 4,
        name: "Stage 4: Post-Transition",
    };
    pub const POST_TRANSITION_DECLINE: Self = Self {
        stage: 5,
        name: "Stage 5: Post-Transition Decline",
    };
}

impl fmt::Display for DemographicStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Place `snapshot` in the transition model
#[must_use]
pub fn classify_demographic_stage(snapshot: &YearSnapshot) -> DemographicStage {
    let total = snapshot.total_population;
    let youth = percent(sum_totals(&snapshot.age_groups, is_youth_range), total);
    let elderly = percent(sum_totals(&snapshot.age_groups, is_elderly_range), total);

    let birth_rate = youth * BIRTH_RATE_PER_YOUTH_PERCENT;
    let death_rate = elderly * DEATH_RATE_PER_ELDERLY_PERCENT;

    if birth_rate > 40.0 && death_rate > 25.0 && youth > 40.0 {
        DemographicStage::PRE_TRANSITION
    } else if birth_rate > 30.0 && death_rate < 20.0 && youth > 35.0 {
        DemographicStage::EARLY_TRANSITION
    } else if (15.0..=30.0).contains(&birth_rate)
        && death_rate < 15.0
        && (25.0..=35.0).contains(&youth)
    {
        DemographicStage::LATE_TRANSITION
    } else if birth_rate < 10.0 && elderly > 20.0 {
        DemographicStage::POST_TRANSITION_DECLINE
    } else {
        DemographicStage::POST_TRANSITION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AgeGroupRecord;
    use crate::utils::test::fixtures::snapshot_with_structure;

    #[test]
    fn test_very_young_population_is_early_transition() {
        let snapshot = snapshot_with_structure(2024, 1_000, 16.0, 450, 30);
        assert_eq!(
            classify_demographic_stage(&snapshot),
            DemographicStage::EARLY_TRANSITION
        );
    }

    #[test]
    fn test_pre_transition_needs_old_and_young() {
        // 45% youth and 35% elderly: implausible, but it is what stage 1 tests for
        let snapshot = snapshot_with_structure(1950, 1_000, 20.0, 450, 350);
        assert_eq!(
            classify_demographic_stage(&snapshot),
            DemographicStage::PRE_TRANSITION
        );
    }

    #[test]
    fn test_falls_through_to_post_transition() {
        // 18% youth gives a proxy birth rate near 60, matching no earlier rule
        let snapshot = snapshot_with_structure(2024, 1_000, 42.0, 180, 200);
        assert_eq!(
            classify_demographic_stage(&snapshot),
            DemographicStage::POST_TRANSITION
        );
        assert_eq!(
            classify_demographic_stage(&snapshot).to_string(),
            "Stage 4: Post-Transition"
        );
    }

    #[test]
    fn test_empty_snapshot() {
        // Zero population: youth and elderly are 0, so no rule before stage 4 applies
        assert_eq!(
            classify_demographic_stage(&YearSnapshot::zeroed(2024)),
            DemographicStage::POST_TRANSITION
        );
    }

    #[test]
    fn test_stage_three_and_five_ranges() {
        // Stage 3 needs birth rate 15-30 with youth 25-35, so it cannot fire with
        // the 3.33 factor; stage 5 needs youth below 3%
        let snapshot = snapshot_with_structure(2024, 1_000, 55.0, 20, 300);
        assert_eq!(
            classify_demographic_stage(&snapshot),
            DemographicStage::POST_TRANSITION_DECLINE
        );
    }

    #[test]
    fn test_collapsed_85_plus_bucket_counts_as_elderly() {
        // Cleaned state snapshots end in "85+" instead of 85-89 .. 100+
        let snapshot = YearSnapshot {
            year: 2023,
            total_population: 1_000,
            male_population: 500,
            female_population: 500,
            median_age: 50.0,
            age_groups: vec![
                AgeGroupRecord::new("0-4", 10, 10),
                AgeGroupRecord::new("30-34", 365, 365),
                AgeGroupRecord::new("65-69", 50, 50),
                AgeGroupRecord::new("85+", 75, 75),
            ],
        };
        // 25% elderly only when 85+ is counted
        assert_eq!(
            classify_demographic_stage(&snapshot),
            DemographicStage::POST_TRANSITION_DECLINE
        );
    }
}
