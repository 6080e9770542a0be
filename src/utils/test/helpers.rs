//! Test helper types
//!
//! [`InMemorySource`] stands in for the JSON data directory and records how
//! often it is read.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{Error, Result};
use crate::loader::PopulationSource;
use crate::models::{Country, CountryPopulationSeries};
use crate::utils::test::fixtures::roster_entry;

/// In-memory [`PopulationSource`] with read counters and injectable failures
#[derive(Debug, Default)]
pub struct InMemorySource {
    roster: Vec<Country>,
    series: HashMap<String, CountryPopulationSeries>,
    failing: HashSet<String>,
    broken_roster: bool,
    roster_reads: AtomicUsize,
    country_reads: AtomicUsize,
}

impl InMemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a series and a matching roster entry
    #[must_use]
    pub fn with_series(self, series: CountryPopulationSeries) -> Self {
        let entry = roster_entry(&series);
        self.with_entry_and_series(entry, series)
    }

    /// Add a series under an explicit roster entry
    #[must_use]
    pub fn with_entry_and_series(
        mut self,
        entry: Country,
        series: CountryPopulationSeries,
    ) -> Self {
        self.series.insert(entry.slug.clone(), series);
        self.roster.push(entry);
        self
    }

    /// Add a roster entry that has no series behind it
    #[must_use]
    pub fn with_roster_entry(mut self, entry: Country) -> Self {
        self.roster.push(entry);
        self
    }

    /// Make every read of `slug` fail
    #[must_use]
    pub fn failing(mut self, slug: &str) -> Self {
        self.failing.insert(slug.to_string());
        self
    }

    /// Make the roster itself unreadable
    #[must_use]
    pub fn with_broken_roster(mut self) -> Self {
        self.broken_roster = true;
        self
    }

    /// Number of `load_country_data` calls so far
    pub fn country_reads(&self) -> usize {
        self.country_reads.load(Ordering::SeqCst)
    }

    /// Number of `load_countries` calls so far
    pub fn roster_reads(&self) -> usize {
        self.roster_reads.load(Ordering::SeqCst)
    }
}

impl PopulationSource for InMemorySource {
    fn load_countries(&self) -> Result<Vec<Country>> {
        self.roster_reads.fetch_add(1, Ordering::SeqCst);
        if self.broken_roster {
            return Err(Error::InvalidData("simulated roster failure".to_string()));
        }
        Ok(self.roster.clone())
    }

    fn load_country_data(&self, slug: &str) -> Result<CountryPopulationSeries> {
        self.country_reads.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(slug) {
            return Err(Error::InvalidData(format!("simulated read failure for {slug}")));
        }
        self.series
            .get(slug)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Country data not found: {slug}")))
    }
}
