//! Algorithm implementations for population analysis
//!
//! World aggregation and country ranking over a [`crate::loader::PopulationSource`],
//! plus per-snapshot metrics, transition-stage classification and decade
//! change figures.

pub mod decade;
pub mod metrics;
pub mod ranking;
pub mod stage;
pub mod world;

// Re-export commonly used items
pub use decade::{DecadeChange, decade_changes};
pub use metrics::{DemographicMetrics, PyramidType, calculate_metrics};
pub use ranking::{CountryRankingRecord, get_countries_with_population_change, rank_countries};
pub use stage::{DemographicStage, classify_demographic_stage};
pub use world::{
    SkippedCountry, WorldAggregator, WorldCache, WorldPopulationSeries, aggregate_world,
    generate_world_population_data,
};
