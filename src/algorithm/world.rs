//! World population aggregation
//!
//! Sums every country's yearly snapshot into a synthetic world snapshot:
//! headline counts are added, median age is averaged with each country
//! weighted by its own population, and age brackets are merged by label.
//!
//! Per-country read failures never abort the aggregation. The failing country
//! simply contributes nothing, and is listed in
//! [`WorldPopulationSeries::skipped`]. A malformed year only removes that
//! year of the country.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use rustc_hash::FxHashMap;

use crate::config::AggregationConfig;
use crate::error::{Error, Result};
use crate::loader::PopulationSource;
use crate::models::{AGE_RANGES, CountryPopulationSeries, YearSnapshot};
use crate::utils::logging::{log_operation_complete, log_operation_start, log_warning};

/// A country, or one year of it, left out of the aggregation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCountry {
    pub slug: String,
    /// The single year left out; `None` when the whole country is missing
    pub year: Option<i32>,
    pub reason: String,
}

/// World snapshots keyed by year string
#[derive(Debug, Clone, PartialEq)]
pub struct WorldPopulationSeries {
    /// One synthesized snapshot per target year
    pub years: BTreeMap<String, YearSnapshot>,
    /// Countries whose data could not be read
    pub skipped: Vec<SkippedCountry>,
}

impl WorldPopulationSeries {
    /// World snapshot for `year`
    #[must_use]
    pub fn snapshot(&self, year: i32) -> Option<&YearSnapshot> {
        self.years.get(&year.to_string())
    }

    /// Aggregated years, oldest first
    #[must_use]
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.years.values().map(|s| s.year).collect();
        years.sort_unstable();
        years
    }
}

/// Compute-once cache for a world series.
///
/// The lock is held for the whole first computation, so concurrent callers
/// wait for that single build instead of starting their own. A failed build
/// leaves the cache empty.
#[derive(Debug, Default)]
pub struct WorldCache {
    inner: Mutex<Option<Arc<WorldPopulationSeries>>>,
}

impl WorldCache {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(None),
        }
    }

    /// Cached series, if one has been built
    pub fn get(&self) -> Result<Option<Arc<WorldPopulationSeries>>> {
        let guard = self.inner.lock().map_err(|_| {
            Error::InvalidOperation("Failed to acquire lock on world cache".to_string())
        })?;
        Ok(guard.clone())
    }

    /// Return the cached series, building it with `build` on first use
    pub fn get_or_try_build<F>(&self, build: F) -> Result<Arc<WorldPopulationSeries>>
    where
        F: FnOnce() -> Result<WorldPopulationSeries>,
    {
        let mut guard = self.inner.lock().map_err(|_| {
            Error::InvalidOperation("Failed to acquire lock on world cache".to_string())
        })?;

        if let Some(cached) = guard.as_ref() {
            log::debug!("World population data served from cache");
            return Ok(Arc::clone(cached));
        }

        let series = Arc::new(build()?);
        *guard = Some(Arc::clone(&series));
        Ok(series)
    }
}

/// Aggregates a [`PopulationSource`] into world totals, memoizing the result
pub struct WorldAggregator<S> {
    source: S,
    config: AggregationConfig,
    cache: WorldCache,
}

impl<S: PopulationSource> WorldAggregator<S> {
    /// Aggregator over the default 1950-2025 range
    pub fn new(source: S) -> Self {
        Self::with_config(source, AggregationConfig::default())
    }

    pub fn with_config(source: S, config: AggregationConfig) -> Self {
        Self {
            source,
            config,
            cache: WorldCache::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn config(&self) -> &AggregationConfig {
        &self.config
    }

    /// World series, computed on the first call and shared afterwards
    pub fn generate(&self) -> Result<Arc<WorldPopulationSeries>> {
        self.cache
            .get_or_try_build(|| aggregate_world(&self.source, &self.config))
    }
}

static WORLD_CACHE: WorldCache = WorldCache::new();

/// Process-wide world series.
///
/// The first successful call fixes the result for the lifetime of the
/// process; later calls ignore `source` and return the same `Arc`.
pub fn generate_world_population_data<S: PopulationSource + ?Sized>(
    source: &S,
) -> Result<Arc<WorldPopulationSeries>> {
    WORLD_CACHE.get_or_try_build(|| aggregate_world(source, &AggregationConfig::default()))
}

/// Run the aggregation without caching.
///
/// Only a failure to read the roster is returned as an error.
pub fn aggregate_world<S: PopulationSource + ?Sized>(
    source: &S,
    config: &AggregationConfig,
) -> Result<WorldPopulationSeries> {
    let start = Instant::now();
    log_operation_start("Aggregating world population for", "all countries");

    let countries = source.load_countries()?;

    let mut loaded: Vec<CountryPopulationSeries> = Vec::with_capacity(countries.len());
    let mut skipped = Vec::new();
    for country in &countries {
        match source.load_country_data(&country.slug) {
            Ok(series) => {
                skipped.extend(
                    series
                        .rejected_years
                        .iter()
                        .filter_map(|rejected| Some((rejected.year()?, rejected)))
                        .filter(|(year, _)| config.contains(*year))
                        .map(|(year, rejected)| SkippedCountry {
                            slug: country.slug.clone(),
                            year: Some(year),
                            reason: rejected.reason.clone(),
                        }),
                );
                loaded.push(series);
            }
            Err(e) => {
                log_warning(
                    &format!("Skipping country in world aggregation ({e})"),
                    Some(&country.slug),
                );
                skipped.push(SkippedCountry {
                    slug: country.slug.clone(),
                    year: None,
                    reason: e.to_string(),
                });
            }
        }
    }

    let bucket_index: FxHashMap<&str, usize> = AGE_RANGES
        .iter()
        .enumerate()
        .map(|(idx, range)| (*range, idx))
        .collect();

    let years: BTreeMap<String, YearSnapshot> = config
        .years()
        .map(|year| {
            (
                year.to_string(),
                aggregate_year(year, &loaded, &bucket_index),
            )
        })
        .collect();

    log_operation_complete(
        "aggregated",
        &format!("{} countries ({} skipped)", loaded.len(), skipped.len()),
        years.len(),
        Some(start.elapsed()),
    );

    Ok(WorldPopulationSeries { years, skipped })
}

fn aggregate_year(
    year: i32,
    countries: &[CountryPopulationSeries],
    bucket_index: &FxHashMap<&str, usize>,
) -> YearSnapshot {
    let key = year.to_string();
    let mut world = YearSnapshot::zeroed(year);
    let mut weighted_age_sum = 0.0_f64;
    let mut contributors = 0_usize;

    for snapshot in countries.iter().filter_map(|c| c.years.get(&key)) {
        contributors += 1;
        world.total_population += snapshot.total_population;
        world.male_population += snapshot.male_population;
        world.female_population += snapshot.female_population;
        weighted_age_sum += snapshot.median_age * snapshot.total_population as f64;

        for group in &snapshot.age_groups {
            // Unknown labels drop only this bucket, not the country
            if let Some(&idx) = bucket_index.get(group.age_range.as_str()) {
                let bucket = &mut world.age_groups[idx];
                bucket.male += group.male;
                bucket.female += group.female;
                bucket.total += group.total;
            }
        }
    }

    if contributors == 0 {
        log::debug!("No country data for {year}");
    }

    world.median_age = if world.total_population > 0 {
        weighted_age_sum / world.total_population as f64
    } else {
        0.0
    };

    let world_total = world.total_population;
    for bucket in &mut world.age_groups {
        bucket.male_percent = Some(percent(bucket.male, bucket.total));
        bucket.female_percent = Some(percent(bucket.female, bucket.total));
        bucket.total_percent = Some(percent(bucket.total, world_total));
    }

    world
}

/// `part / whole * 100`, or 0 when `whole` is 0
pub(crate) fn percent(part: u64, whole: u64) -> f64 {
    if whole > 0 {
        part as f64 / whole as f64 * 100.0
    } else {
        0.0
    }
}
