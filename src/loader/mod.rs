//! Country data loading
//!
//! [`PopulationSource`] is the seam between the static data and the
//! aggregation code: the world aggregator and the ranking enricher only ever
//! talk to this trait, so tests can feed them in-memory data.

pub mod json;
pub mod states;

pub use json::JsonDataSource;
pub use states::clean_state_year_data;

use crate::error::Result;
use crate::models::{Country, CountryPopulationSeries};

/// Read-only access to the country roster and per-country series
pub trait PopulationSource {
    /// Enumerate the full country roster, in roster order
    fn load_countries(&self) -> Result<Vec<Country>>;

    /// Load the series for one slug.
    ///
    /// Fails with [`crate::Error::NotFound`] when no record exists for `slug`.
    fn load_country_data(&self, slug: &str) -> Result<CountryPopulationSeries>;
}

impl<S: PopulationSource + ?Sized> PopulationSource for &S {
    fn load_countries(&self) -> Result<Vec<Country>> {
        (**self).load_countries()
    }

    fn load_country_data(&self, slug: &str) -> Result<CountryPopulationSeries> {
        (**self).load_country_data(slug)
    }
}

/// Find a roster entry by slug
pub fn get_country_by_slug<S: PopulationSource + ?Sized>(
    source: &S,
    slug: &str,
) -> Result<Option<Country>> {
    Ok(source
        .load_countries()?
        .into_iter()
        .find(|country| country.slug == slug))
}
