//! Country ranking and comparison metrics
//!
//! Flattens each country's series into one record of comparison metrics at
//! three reference years, then orders the records by current population.

use std::time::Instant;

use itertools::Itertools;

use crate::algorithm::world::percent;
use crate::config::RankingConfig;
use crate::error::Result;
use crate::loader::PopulationSource;
use crate::models::age_group::{is_youth_range, matches_elderly_marker, sum_totals};
use crate::models::{Country, CountryPopulationSeries};
use crate::utils::logging::{log_operation_complete, log_operation_start, log_warning};

/// Region used when a country has none, or its data could not be read
pub const UNKNOWN_REGION: &str = "Unknown";

/// Comparison metrics for one country
#[derive(Debug, Clone, PartialEq)]
pub struct CountryRankingRecord {
    pub code: String,
    pub name: String,
    pub slug: String,
    pub flag: String,
    pub region: String,
    pub population2024: u64,
    pub population2000: u64,
    pub population1990: u64,
    /// `population2024 - population2000`
    pub population_change: i64,
    /// Relative change since 2000, in percent; 0 when 2000 has no population
    pub population_change_percent: f64,
    pub median_age2024: f64,
    pub median_age2000: f64,
    pub median_age_change: f64,
    /// Share of 0-14 year olds in 2024, in percent
    pub youth_percent2024: f64,
    /// Share of elderly brackets in 2024, in percent
    pub elderly_percent2024: f64,
    /// Dependants per 100 working-age people in 2024
    pub dependency_ratio2024: f64,
}

impl CountryRankingRecord {
    /// Record built from a country's series
    #[must_use]
    pub fn from_series(
        country: &Country,
        series: &CountryPopulationSeries,
        config: &RankingConfig,
    ) -> Self {
        let current = series.snapshot(config.current_year);
        let baseline = series.snapshot(config.baseline_year);

        let population2024 = current.map_or(0, |s| s.total_population);
        let population2000 = baseline.map_or(0, |s| s.total_population);
        let population1990 = series
            .snapshot(config.historical_year)
            .map_or(0, |s| s.total_population);

        let population_change = population2024 as i64 - population2000 as i64;
        let population_change_percent = if population2000 > 0 {
            population_change as f64 / population2000 as f64 * 100.0
        } else {
            0.0
        };

        let median_age2024 = current.map_or(0.0, |s| s.median_age);
        let median_age2000 = baseline.map_or(0.0, |s| s.median_age);

        let (youth_percent2024, elderly_percent2024, dependency_ratio2024) = current
            .map(|snapshot| {
                let youth = sum_totals(&snapshot.age_groups, is_youth_range);
                let elderly = sum_totals(&snapshot.age_groups, matches_elderly_marker);
                let working = snapshot.total_population as i64 - youth as i64 - elderly as i64;
                let dependency = if working > 0 {
                    (youth + elderly) as f64 / working as f64 * 100.0
                } else {
                    0.0
                };
                (
                    percent(youth, snapshot.total_population),
                    percent(elderly, snapshot.total_population),
                    dependency,
                )
            })
            .unwrap_or((0.0, 0.0, 0.0));

        let region = if series.region.is_empty() {
            UNKNOWN_REGION.to_string()
        } else {
            series.region.clone()
        };

        Self {
            code: country.code.clone(),
            name: country.name.clone(),
            slug: country.slug.clone(),
            flag: country.flag.clone(),
            region,
            population2024,
            population2000,
            population1990,
            population_change,
            population_change_percent,
            median_age2024,
            median_age2000,
            median_age_change: median_age2024 - median_age2000,
            youth_percent2024,
            elderly_percent2024,
            dependency_ratio2024,
        }
    }

    /// Zeroed record for a country whose data could not be read.
    ///
    /// Only the roster's own 2024 population hint survives.
    #[must_use]
    pub fn fallback(country: &Country) -> Self {
        Self {
            code: country.code.clone(),
            name: country.name.clone(),
            slug: country.slug.clone(),
            flag: country.flag.clone(),
            region: UNKNOWN_REGION.to_string(),
            population2024: country.population2024,
            population2000: 0,
            population1990: 0,
            population_change: 0,
            population_change_percent: 0.0,
            median_age2024: 0.0,
            median_age2000: 0.0,
            median_age_change: 0.0,
            youth_percent2024: 0.0,
            elderly_percent2024: 0.0,
            dependency_ratio2024: 0.0,
        }
    }
}

/// Ranking with the default reference years (2024, 2000, 1990)
pub fn get_countries_with_population_change<S: PopulationSource + ?Sized>(
    source: &S,
) -> Result<Vec<CountryRankingRecord>> {
    rank_countries(source, &RankingConfig::default())
}

/// One record per roster entry, most populous first.
///
/// The sort is stable: countries with equal population keep roster order.
pub fn rank_countries<S: PopulationSource + ?Sized>(
    source: &S,
    config: &RankingConfig,
) -> Result<Vec<CountryRankingRecord>> {
    let start = Instant::now();
    log_operation_start("Ranking countries by population in", &config.current_year.to_string());

    let countries = source.load_countries()?;

    let ranking: Vec<CountryRankingRecord> = countries
        .iter()
        .map(|country| match source.load_country_data(&country.slug) {
            Ok(series) => CountryRankingRecord::from_series(country, &series, config),
            Err(e) => {
                log_warning(
                    &format!("Using roster data only for ranking ({e})"),
                    Some(&country.slug),
                );
                CountryRankingRecord::fallback(country)
            }
        })
        .sorted_by(|a, b| b.population2024.cmp(&a.population2024))
        .collect();

    log_operation_complete("ranked", "country roster", ranking.len(), Some(start.elapsed()));
    Ok(ranking)
}
