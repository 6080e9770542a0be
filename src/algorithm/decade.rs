//! Decade-by-decade change figures for one country

use serde::Serialize;

use crate::algorithm::world::percent;
use crate::models::age_group::{is_youth_range, matches_elderly_marker, sum_totals};
use crate::models::{CountryPopulationSeries, YearSnapshot};

/// Decades covered, with the years each is measured between
pub const DECADES: [(&str, i32, i32); 6] = [
    ("1970s", 1970, 1980),
    ("1980s", 1980, 1990),
    ("1990s", 1990, 2000),
    ("2000s", 2000, 2010),
    ("2010s", 2010, 2020),
    ("2020s", 2020, 2024),
];

/// Change in headline figures across one decade
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecadeChange {
    pub decade: &'static str,
    pub start_year: i32,
    pub end_year: i32,
    /// Both the start and end snapshot exist
    pub has_data: bool,
    pub start_population: u64,
    pub end_population: u64,
    /// Relative population change, in percent
    pub population_change: f64,
    pub median_age_change: f64,
    /// Change in youth share, in percentage points
    pub youth_percent_change: f64,
    /// Change in elderly share, in percentage points
    pub elderly_percent_change: f64,
}

impl DecadeChange {
    fn empty(decade: &'static str, start_year: i32, end_year: i32) -> Self {
        Self {
            decade,
            start_year,
            end_year,
            has_data: false,
            start_population: 0,
            end_population: 0,
            population_change: 0.0,
            median_age_change: 0.0,
            youth_percent_change: 0.0,
            elderly_percent_change: 0.0,
        }
    }
}

fn youth_share(snapshot: &YearSnapshot) -> f64 {
    percent(
        sum_totals(&snapshot.age_groups, is_youth_range),
        snapshot.total_population,
    )
}

fn elderly_share(snapshot: &YearSnapshot) -> f64 {
    percent(
        sum_totals(&snapshot.age_groups, matches_elderly_marker),
        snapshot.total_population,
    )
}

/// One entry per decade in [`DECADES`], in order
#[must_use]
pub fn decade_changes(series: &CountryPopulationSeries) -> Vec<DecadeChange> {
    DECADES
        .iter()
        .map(|&(decade, start_year, end_year)| {
            let (Some(start), Some(end)) = (series.snapshot(start_year), series.snapshot(end_year))
            else {
                return DecadeChange::empty(decade, start_year, end_year);
            };

            let population_change = if start.total_population > 0 {
                (end.total_population as f64 - start.total_population as f64)
                    / start.total_population as f64
                    * 100.0
            } else {
                0.0
            };

            DecadeChange {
                decade,
                start_year,
                end_year,
                has_data: true,
                start_population: start.total_population,
                end_population: end.total_population,
                population_change,
                median_age_change: end.median_age - start.median_age,
                youth_percent_change: youth_share(end) - youth_share(start),
                elderly_percent_change: elderly_share(end) - elderly_share(start),
            }
        })
        .collect()
}
