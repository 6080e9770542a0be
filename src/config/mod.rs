//! Configuration for population data loading and aggregation.

use std::fmt;
use std::path::{Path, PathBuf};

/// Layout of the static population data directory
#[derive(Debug, Clone)]
pub struct AtlasConfig {
    /// Root directory holding all static data files
    pub data_dir: PathBuf,
    /// File name of the country roster inside `data_dir`
    pub countries_file: String,
    /// Directory (relative to `data_dir`) with one JSON file per country slug
    pub population_dir: String,
    /// File name of the US state roster inside `data_dir`
    pub states_file: String,
    /// Directory (relative to `data_dir`) with one JSON file per state slug
    pub states_dir: String,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            countries_file: "countries.json".to_string(),
            population_dir: "population".to_string(),
            states_file: "states.json".to_string(),
            states_dir: "states".to_string(),
        }
    }
}

impl AtlasConfig {
    /// Default layout rooted at `data_dir`
    #[must_use]
    pub fn with_data_dir(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Path of the country roster
    #[must_use]
    pub fn countries_path(&self) -> PathBuf {
        self.data_dir.join(&self.countries_file)
    }

    /// Directory holding per-country records
    #[must_use]
    pub fn population_path(&self) -> PathBuf {
        self.data_dir.join(&self.population_dir)
    }

    /// Path of the record for one country slug
    #[must_use]
    pub fn country_path(&self, slug: &str) -> PathBuf {
        self.population_path().join(format!("{slug}.json"))
    }

    /// Path of the US state roster
    #[must_use]
    pub fn states_path(&self) -> PathBuf {
        self.data_dir.join(&self.states_file)
    }

    /// Path of the record for one state slug
    #[must_use]
    pub fn state_path(&self, slug: &str) -> PathBuf {
        self.data_dir
            .join(&self.states_dir)
            .join(format!("{slug}.json"))
    }
}

impl fmt::Display for AtlasConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Atlas Configuration:")?;
        writeln!(f, "  Data Directory: {}", self.data_dir.display())?;
        writeln!(f, "  Country Roster: {}", self.countries_path().display())?;
        writeln!(f, "  Country Records: {}", self.population_path().display())?;
        writeln!(f, "  State Roster: {}", self.states_path().display())?;
        Ok(())
    }
}

/// Target year range for world aggregation (inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregationConfig {
    /// First aggregated year
    pub first_year: i32,
    /// Last aggregated year
    pub last_year: i32,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            first_year: 1950,
            last_year: 2025,
        }
    }
}

impl AggregationConfig {
    /// Iterate over all target years
    pub fn years(&self) -> impl Iterator<Item = i32> {
        self.first_year..=self.last_year
    }

    /// Whether `year` is one of the target years
    #[must_use]
    pub fn contains(&self, year: i32) -> bool {
        (self.first_year..=self.last_year).contains(&year)
    }
}

/// Reference years used by the country ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingConfig {
    /// Year the ranking is sorted by
    pub current_year: i32,
    /// Year population change and median-age change are measured from
    pub baseline_year: i32,
    /// Additional historical reference point
    pub historical_year: i32,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            current_year: 2024,
            baseline_year: 2000,
            historical_year: 1990,
        }
    }
}
