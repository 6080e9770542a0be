//! A Rust library for loading UN population pyramids and deriving world
//! totals and country rankings from them.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{AggregationConfig, AtlasConfig, RankingConfig};
pub use error::{Error, Result};
pub use models::{
    AGE_RANGES, AgeGroupRecord, Country, CountryPopulationSeries, State, StatePopulationSeries,
    YearSnapshot,
};

// Loading
pub use loader::{JsonDataSource, PopulationSource, clean_state_year_data, get_country_by_slug};

// Aggregation and ranking
pub use algorithm::{
    CountryRankingRecord, WorldAggregator, WorldPopulationSeries, calculate_metrics,
    classify_demographic_stage, decade_changes, generate_world_population_data,
    get_countries_with_population_change,
};
