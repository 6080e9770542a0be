//! Demographic metrics for a single snapshot
//!
//! Age structure shares, dependency ratios and pyramid shape. Brackets are
//! classified by the numeric lower bound of their label; every ratio with a
//! zero divisor is reported as 0.

use std::fmt;

use serde::Serialize;

use crate::algorithm::world::percent;
use crate::models::YearSnapshot;
use crate::models::age_group::{is_elderly_range, is_youth_range};

/// Broad shape of a population pyramid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PyramidType {
    /// Wide base, narrow top: young, growing population
    Expansive,
    /// Narrow base: ageing, shrinking population
    Constrictive,
    Stationary,
}

impl PyramidType {
    /// Classify from youth and elderly shares (in percent)
    #[must_use]
    pub fn classify(youth_percentage: f64, elderly_percentage: f64) -> Self {
        if youth_percentage > 30.0 && elderly_percentage < 10.0 {
            Self::Expansive
        } else if youth_percentage < 20.0 && elderly_percentage > 15.0 {
            Self::Constrictive
        } else {
            Self::Stationary
        }
    }
}

impl fmt::Display for PyramidType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Expansive => "expansive",
            Self::Constrictive => "constrictive",
            Self::Stationary => "stationary",
        };
        write!(f, "{label}")
    }
}

/// Derived indicators for one snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemographicMetrics {
    pub total_population: u64,
    pub male_population: u64,
    pub female_population: u64,
    pub median_age: f64,
    /// Males per 100 females
    pub sex_ratio: f64,
    pub male_percent: f64,
    pub female_percent: f64,
    pub youth_population: u64,
    pub working_age_population: u64,
    pub elderly_population: u64,
    pub youth_percentage: f64,
    pub working_age_percentage: f64,
    pub elderly_percentage: f64,
    /// Dependants (0-14 and 65+) per 100 working-age people
    pub dependency_ratio: f64,
    pub child_dependency_ratio: f64,
    pub old_age_dependency_ratio: f64,
    /// Working-age people per elderly person
    pub potential_support_ratio: f64,
    /// Elderly per 100 young people
    pub aging_index: f64,
    pub pyramid_type: PyramidType,
}

fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator > 0 {
        numerator as f64 / denominator as f64
    } else {
        0.0
    }
}

/// Compute all indicators for `snapshot`
#[must_use]
pub fn calculate_metrics(snapshot: &YearSnapshot) -> DemographicMetrics {
    let total = snapshot.total_population;

    let youth_population: u64 = snapshot
        .age_groups
        .iter()
        .filter(|g| is_youth_range(&g.age_range))
        .map(|g| g.effective_total())
        .sum();
    let elderly_population: u64 = snapshot
        .age_groups
        .iter()
        .filter(|g| is_elderly_range(&g.age_range))
        .map(|g| g.effective_total())
        .sum();
    let working_age_population = total.saturating_sub(youth_population + elderly_population);

    let youth_percentage = percent(youth_population, total);
    let elderly_percentage = percent(elderly_population, total);

    DemographicMetrics {
        total_population: total,
        male_population: snapshot.male_population,
        female_population: snapshot.female_population,
        median_age: snapshot.median_age,
        sex_ratio: percent(snapshot.male_population, snapshot.female_population),
        male_percent: percent(snapshot.male_population, total),
        female_percent: percent(snapshot.female_population, total),
        youth_population,
        working_age_population,
        elderly_population,
        youth_percentage,
        working_age_percentage: percent(working_age_population, total),
        elderly_percentage,
        dependency_ratio: percent(youth_population + elderly_population, working_age_population),
        child_dependency_ratio: percent(youth_population, working_age_population),
        old_age_dependency_ratio: percent(elderly_population, working_age_population),
        potential_support_ratio: ratio(working_age_population, elderly_population),
        aging_index: percent(elderly_population, youth_population),
        pyramid_type: PyramidType::classify(youth_percentage, elderly_percentage),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test::fixtures::snapshot_with_structure;

    #[test]
    fn test_young_population() {
        let metrics = calculate_metrics(&snapshot_with_structure(2024, 10_000, 17.0, 4_000, 500));

        assert_eq!(metrics.youth_population, 4_000);
        assert_eq!(metrics.elderly_population, 500);
        assert_eq!(metrics.working_age_population, 5_500);
        assert!((metrics.youth_percentage - 40.0).abs() < 1e-9);
        assert!((metrics.elderly_percentage - 5.0).abs() < 1e-9);
        assert!((metrics.dependency_ratio - 4_500.0 / 5_500.0 * 100.0).abs() < 1e-9);
        assert!((metrics.potential_support_ratio - 11.0).abs() < 1e-9);
        assert!((metrics.aging_index - 12.5).abs() < 1e-9);
        assert_eq!(metrics.pyramid_type, PyramidType::Expansive);
    }

    #[test]
    fn test_old_population() {
        let metrics = calculate_metrics(&snapshot_with_structure(2024, 10_000, 48.0, 1_200, 3_000));
        assert_eq!(metrics.pyramid_type, PyramidType::Constrictive);
        assert!((metrics.sex_ratio - 100.0).abs() < 1.0);
    }

    #[test]
    fn test_balanced_population() {
        let metrics = calculate_metrics(&snapshot_with_structure(2024, 10_000, 33.0, 2_500, 1_200));
        assert_eq!(metrics.pyramid_type, PyramidType::Stationary);
        assert_eq!(metrics.pyramid_type.to_string(), "stationary");
    }

    #[test]
    fn test_empty_snapshot_has_no_nan() {
        let metrics = calculate_metrics(&YearSnapshot::zeroed(1950));
        for value in [
            metrics.sex_ratio,
            metrics.male_percent,
            metrics.youth_percentage,
            metrics.dependency_ratio,
            metrics.potential_support_ratio,
            metrics.aging_index,
        ] {
            assert_eq!(value, 0.0);
        }
    }

    #[test]
    fn test_missing_bucket_totals_fall_back_to_sexes() {
        let mut snapshot = snapshot_with_structure(2024, 1_000, 30.0, 300, 100);
        for group in &mut snapshot.age_groups {
            group.total = 0;
        }
        let metrics = calculate_metrics(&snapshot);
        assert_eq!(metrics.youth_population, 300);
        assert_eq!(metrics.elderly_population, 100);
    }
}
