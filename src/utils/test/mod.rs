//! Test utilities
//!
//! Synthetic population data and an in-memory source for exercising the
//! loader, aggregator and ranking without a data directory.

pub mod helpers;

// Re-export commonly used functions for convenience
pub use fixtures::{country_series, roster_entry, snapshot_with_structure, write_data_dir};
pub use helpers::InMemorySource;
