//! Domain models for population data
//!
//! Age brackets, yearly snapshots and the per-country and per-state series
//! read from the static data directory.

pub mod age_group;
pub mod country;
pub mod snapshot;
pub mod state;

// Re-export commonly used types
pub use age_group::{AGE_RANGES, AgeGroupRecord};
pub use country::{Country, CountryPopulationSeries};
pub use snapshot::{RejectedYear, YearSnapshot};
pub use state::{State, StatePopulationSeries};
