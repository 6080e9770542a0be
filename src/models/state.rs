//! US state roster and per-state population series

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::snapshot::{RejectedYear, YearSnapshot, decode_year_entries};

/// Entry of the US state roster (`states.json`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    /// Postal code, e.g. `TX`
    pub code: String,
    pub name: String,
    pub slug: String,
    /// FIPS code
    #[serde(default)]
    pub fips: String,
    /// Census region
    #[serde(default)]
    pub region: String,
}

/// Year-indexed demographic snapshots of one US state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawStateSeries")]
pub struct StatePopulationSeries {
    pub state_code: String,
    pub state_name: String,
    pub slug: String,
    pub fips: String,
    pub region: String,
    pub years: BTreeMap<String, YearSnapshot>,
    /// Year entries that could not be decoded
    #[serde(skip)]
    pub rejected_years: Vec<RejectedYear>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStateSeries {
    #[serde(default)]
    state_code: String,
    state_name: String,
    #[serde(default)]
    slug: String,
    #[serde(default)]
    fips: String,
    #[serde(default)]
    region: String,
    #[serde(default)]
    years: BTreeMap<String, serde_json::Value>,
}

impl From<RawStateSeries> for StatePopulationSeries {
    fn from(raw: RawStateSeries) -> Self {
        let (years, rejected_years) = decode_year_entries(raw.years);
        Self {
            state_code: raw.state_code,
            state_name: raw.state_name,
            slug: raw.slug,
            fips: raw.fips,
            region: raw.region,
            years,
            rejected_years,
        }
    }
}

impl StatePopulationSeries {
    /// Snapshot for `year`, if the series covers it
    #[must_use]
    pub fn snapshot(&self, year: i32) -> Option<&YearSnapshot> {
        self.years.get(&year.to_string())
    }

    /// Years with data, oldest first
    #[must_use]
    pub fn available_years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self
            .years
            .keys()
            .filter_map(|key| key.parse().ok())
            .collect();
        years.sort_unstable();
        years
    }
}
