#![allow(dead_code)]

use pop_atlas::CountryPopulationSeries;
use pop_atlas::utils::test::{InMemorySource, country_series, snapshot_with_structure};

/// Initialise logging once for a test binary; repeated calls are ignored
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Country A: 10M people in 2024, median age 20, 4M under 15
pub fn country_a() -> CountryPopulationSeries {
    country_series(
        "Country A",
        "Africa",
        [
            snapshot_with_structure(2000, 6_000_000, 17.0, 2_700_000, 150_000),
            snapshot_with_structure(2024, 10_000_000, 20.0, 4_000_000, 300_000),
        ],
    )
}

/// Country B: 5M people in 2024, median age 40, 0.5M under 15
pub fn country_b() -> CountryPopulationSeries {
    country_series(
        "Country B",
        "Europe",
        [
            snapshot_with_structure(1990, 5_200_000, 34.0, 900_000, 600_000),
            snapshot_with_structure(2000, 5_100_000, 36.0, 700_000, 750_000),
            snapshot_with_structure(2024, 5_000_000, 40.0, 500_000, 1_100_000),
        ],
    )
}

/// Source with B listed before A in the roster
pub fn two_country_source() -> InMemorySource {
    InMemorySource::new()
        .with_series(country_b())
        .with_series(country_a())
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}
