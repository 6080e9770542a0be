//! Yearly demographic snapshot model

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::age_group::{AGE_RANGES, AgeGroupRecord, deserialize_count};

/// Demographic state of one country, state or the world in one calendar year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearSnapshot {
    /// Calendar year
    pub year: i32,
    /// Total population
    #[serde(default, deserialize_with = "deserialize_count")]
    pub total_population: u64,
    /// Male population
    #[serde(default, deserialize_with = "deserialize_count")]
    pub male_population: u64,
    /// Female population
    #[serde(default, deserialize_with = "deserialize_count")]
    pub female_population: u64,
    /// Median age in years
    #[serde(default)]
    pub median_age: f64,
    /// Age brackets, youngest first
    #[serde(default)]
    pub age_groups: Vec<AgeGroupRecord>,
}

impl YearSnapshot {
    /// Snapshot with every standard bracket present and all counts zero
    #[must_use]
    pub fn zeroed(year: i32) -> Self {
        Self {
            year,
            total_population: 0,
            male_population: 0,
            female_population: 0,
            median_age: 0.0,
            age_groups: AGE_RANGES
                .iter()
                .map(|range| AgeGroupRecord::zeroed(*range))
                .collect(),
        }
    }

    /// Look up a bracket by label
    #[must_use]
    pub fn age_group(&self, age_range: &str) -> Option<&AgeGroupRecord> {
        self.age_groups
            .iter()
            .find(|group| group.age_range == age_range)
    }

    /// Sum of all bracket totals
    #[must_use]
    pub fn age_group_total(&self) -> u64 {
        self.age_groups.iter().map(|group| group.total).sum()
    }

    /// Whether `total == male + female` holds for the headline counts
    #[must_use]
    pub fn is_sex_balanced(&self) -> bool {
        self.total_population == self.male_population + self.female_population
    }
}

/// A year entry of a series file that could not be decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedYear {
    /// Key of the entry in the `years` object
    pub key: String,
    pub reason: String,
}

impl RejectedYear {
    /// The rejected calendar year, if the key is one
    #[must_use]
    pub fn year(&self) -> Option<i32> {
        self.key.parse().ok()
    }
}

/// Decode each entry of a `years` object on its own.
///
/// A malformed entry is set aside as a [`RejectedYear`]; the other years are
/// kept.
pub(crate) fn decode_year_entries(
    raw: BTreeMap<String, serde_json::Value>,
) -> (BTreeMap<String, YearSnapshot>, Vec<RejectedYear>) {
    let mut years = BTreeMap::new();
    let mut rejected = Vec::new();
    for (key, value) in raw {
        match serde_json::from_value::<YearSnapshot>(value) {
            Ok(snapshot) => {
                years.insert(key, snapshot);
            }
            Err(e) => {
                log::debug!("Rejecting year entry {key:?}: {e}");
                rejected.push(RejectedYear {
                    key,
                    reason: e.to_string(),
                });
            }
        }
    }
    (years, rejected)
}
