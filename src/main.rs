use anyhow::Context;
use log::{info, warn};
use pop_atlas::algorithm::rank_countries;
use pop_atlas::error::util::validate_directory;
use pop_atlas::{AtlasConfig, JsonDataSource, RankingConfig, WorldAggregator};
use std::path::PathBuf;
use std::time::Instant;

const SUMMARY_YEARS: [i32; 3] = [1950, 2000, 2025];
const TOP_COUNTRIES: usize = 10;

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let data_dir = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("data"), PathBuf::from);
    let config = AtlasConfig::with_data_dir(&data_dir);
    info!("{config}");

    if let Err(e) = validate_directory(&data_dir, "population data") {
        warn!("{e}");
        return Ok(());
    }

    let source = JsonDataSource::new(config);
    let start = Instant::now();

    let aggregator = WorldAggregator::new(&source);
    let world = aggregator
        .generate()
        .context("Failed to aggregate world population")?;
    for skipped in &world.skipped {
        match skipped.year {
            Some(year) => warn!(
                "Left out of world totals for {year}: {} ({})",
                skipped.slug, skipped.reason
            ),
            None => warn!("Left out of world totals: {} ({})", skipped.slug, skipped.reason),
        }
    }

    println!("World population");
    for year in SUMMARY_YEARS {
        if let Some(snapshot) = world.snapshot(year) {
            println!(
                "  {year}: {:>15} people, median age {:.1}",
                snapshot.total_population, snapshot.median_age
            );
        }
    }

    let ranking = rank_countries(&source, &RankingConfig::default())
        .context("Failed to rank countries")?;

    println!("\nMost populous countries (2024)");
    for (position, record) in ranking.iter().take(TOP_COUNTRIES).enumerate() {
        println!(
            "  {:>2}. {:<32} {:>15} {:>+7.1}% since 2000, dependency ratio {:.1}",
            position + 1,
            record.name,
            record.population2024,
            record.population_change_percent,
            record.dependency_ratio2024
        );
    }

    info!(
        "Processed {} countries in {:?}",
        ranking.len(),
        start.elapsed()
    );
    Ok(())
}
