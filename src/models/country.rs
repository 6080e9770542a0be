//! Country roster and per-country population series

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::snapshot::{RejectedYear, YearSnapshot, decode_year_entries};

/// Entry of the fixed country roster (`countries.json`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// ISO 3166-1 alpha-3 code
    pub code: String,
    /// Full country name
    pub name: String,
    /// URL-friendly slug, also the record file name
    pub slug: String,
    /// UN region
    #[serde(default)]
    pub region: String,
    /// Roster-level population hint for 2024
    #[serde(default)]
    pub population2024: u64,
    /// Flag emoji
    #[serde(default)]
    pub flag: String,
}

/// Year-indexed demographic snapshots of one country.
///
/// Year entries are decoded one by one: a malformed year ends up in
/// `rejected_years` instead of failing the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawCountrySeries")]
pub struct CountryPopulationSeries {
    pub country_code: String,
    pub country_name: String,
    pub slug: String,
    pub region: String,
    /// Snapshots keyed by year string, e.g. `"2024"`
    pub years: BTreeMap<String, YearSnapshot>,
    /// Year entries that could not be decoded
    #[serde(skip)]
    pub rejected_years: Vec<RejectedYear>,
}

/// On-disk shape of a country record, before the years are decoded
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCountrySeries {
    #[serde(default)]
    country_code: String,
    country_name: String,
    #[serde(default)]
    slug: String,
    #[serde(default)]
    region: String,
    #[serde(default)]
    years: BTreeMap<String, serde_json::Value>,
}

impl From<RawCountrySeries> for CountryPopulationSeries {
    fn from(raw: RawCountrySeries) -> Self {
        let (years, rejected_years) = decode_year_entries(raw.years);
        Self {
            country_code: raw.country_code,
            country_name: raw.country_name,
            slug: raw.slug,
            region: raw.region,
            years,
            rejected_years,
        }
    }
}

impl CountryPopulationSeries {
    #[must_use]
    pub fn new(country_name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            country_code: String::new(),
            country_name: country_name.into(),
            slug: String::new(),
            region: region.into(),
            years: BTreeMap::new(),
            rejected_years: Vec::new(),
        }
    }

    /// Insert or replace the snapshot for its own year
    pub fn insert(&mut self, snapshot: YearSnapshot) {
        self.years.insert(snapshot.year.to_string(), snapshot);
    }

    /// Snapshot for `year`, if the series covers it
    #[must_use]
    pub fn snapshot(&self, year: i32) -> Option<&YearSnapshot> {
        self.years.get(&year.to_string())
    }

    /// Years with data, most recent first. Keys that are not years are ignored.
    #[must_use]
    pub fn available_years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self
            .years
            .keys()
            .filter_map(|key| key.parse().ok())
            .collect();
        years.sort_unstable_by(|a, b| b.cmp(a));
        years
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_years_descending() {
        let mut series = CountryPopulationSeries::new("Testland", "Europe");
        for year in [1990, 2024, 1950, 2000] {
            series.insert(YearSnapshot::zeroed(year));
        }
        series
            .years
            .insert("notes".to_string(), YearSnapshot::zeroed(0));
        assert_eq!(series.available_years(), vec![2024, 2000, 1990, 1950]);
        assert!(series.snapshot(2000).is_some());
        assert!(series.snapshot(2001).is_none());
    }

    #[test]
    fn test_roster_entry_defaults() {
        let country: Country = serde_json::from_str(
            r#"{"code":"TST","name":"Testland","slug":"testland"}"#,
        )
        .unwrap();
        assert_eq!(country.population2024, 0);
        assert!(country.flag.is_empty());
        assert!(country.region.is_empty());
    }

    #[test]
    fn test_malformed_year_does_not_fail_the_record() {
        let series: CountryPopulationSeries = serde_json::from_str(
            r#"{
                "countryName": "Testland",
                "years": {
                    "1990": {"year": 1990, "totalPopulation": 80, "ageGroups": [{"male": 1.5}]},
                    "2024": {"year": 2024, "totalPopulation": 100, "medianAge": 30.0}
                }
            }"#,
        )
        .unwrap();
        assert_eq!(series.available_years(), vec![2024]);
        assert_eq!(series.rejected_years.len(), 1);
        assert_eq!(series.rejected_years[0].key, "1990");
    }
}
