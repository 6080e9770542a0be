//! JSON directory source
//!
//! Reads the static layout: a `countries.json` roster plus one
//! `population/<slug>.json` record per country.

use std::time::Instant;

use crate::config::AtlasConfig;
use crate::error::util::read_json;
use crate::error::{Error, Result};
use crate::loader::PopulationSource;
use crate::models::{Country, CountryPopulationSeries};
use crate::utils::logging::{log_operation_complete, log_path_operation_start, log_warning};

/// [`PopulationSource`] backed by the static JSON data directory
#[derive(Debug, Clone, Default)]
pub struct JsonDataSource {
    config: AtlasConfig,
}

impl JsonDataSource {
    #[must_use]
    pub fn new(config: AtlasConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &AtlasConfig {
        &self.config
    }
}

/// Slugs are file names; anything that could walk out of the data directory is rejected
fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

pub(crate) fn ensure_valid_slug(slug: &str) -> Result<()> {
    if is_valid_slug(slug) {
        Ok(())
    } else {
        Err(Error::NotFound(format!("invalid slug: {slug:?}")))
    }
}

impl PopulationSource for JsonDataSource {
    fn load_countries(&self) -> Result<Vec<Country>> {
        let path = self.config.countries_path();
        let start = Instant::now();
        log_path_operation_start("Loading country roster from", &path);

        let countries: Vec<Country> = read_json(&path, "country roster")?;

        log_operation_complete(
            "loaded",
            &path.display().to_string(),
            countries.len(),
            Some(start.elapsed()),
        );
        Ok(countries)
    }

    fn load_country_data(&self, slug: &str) -> Result<CountryPopulationSeries> {
        ensure_valid_slug(slug)?;
        let path = self.config.country_path(slug);
        log::debug!("Reading country record {}", path.display());

        let mut series: CountryPopulationSeries =
            read_json(&path, "country population data").map_err(|e| match e {
                Error::NotFound(_) => Error::NotFound(format!("Country data not found: {slug}")),
                other => other,
            })?;

        if series.slug.is_empty() {
            series.slug = slug.to_string();
        }
        for rejected in &series.rejected_years {
            log_warning(
                &format!("Ignoring malformed year {:?} ({})", rejected.key, rejected.reason),
                Some(slug),
            );
        }
        Ok(series)
    }
}
