//! Age group model
//!
//! The UN pyramids use 21 fixed five-year brackets, shared by every country
//! and every year. World buckets are matched to country buckets by label.

use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};

/// The fixed, ordered set of age-range labels
pub const AGE_RANGES: [&str; 21] = [
    "0-4", "5-9", "10-14", "15-19", "20-24", "25-29", "30-34", "35-39", "40-44", "45-49",
    "50-54", "55-59", "60-64", "65-69", "70-74", "75-79", "80-84", "85-89", "90-94", "95-99",
    "100+",
];

/// Brackets making up the 0-14 youth population
pub const YOUTH_RANGES: [&str; 3] = ["0-4", "5-9", "10-14"];

/// Markers whose presence anywhere in a label puts a bracket in the elderly group
pub const ELDERLY_DECADE_MARKERS: [&str; 8] = ["65", "70", "75", "80", "85", "90", "95", "100"];

/// First age of the elderly (65+) group
pub const ELDERLY_MIN_AGE: u32 = 65;

/// Custom deserializer for head counts.
///
/// Counts arrive as JSON numbers that are sometimes written as whole floats
/// (`1.0`); those are accepted, fractional or negative values are not.
pub(crate) fn deserialize_count<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    struct CountVisitor;

    impl de::Visitor<'_> for CountVisitor {
        type Value = u64;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a non-negative whole number")
        }

        fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            u64::try_from(value).map_err(|_| E::invalid_value(Unexpected::Signed(value), &self))
        }

        fn visit_f64<E>(self, value: f64) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64
            {
                Ok(value as u64)
            } else {
                Err(E::invalid_value(Unexpected::Float(value), &self))
            }
        }
    }

    deserializer.deserialize_any(CountVisitor)
}

/// Population of one age bracket, split by sex
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeGroupRecord {
    /// Bracket label, one of [`AGE_RANGES`] in well-formed data
    #[serde(default)]
    pub age_range: String,
    /// Male count
    #[serde(default, deserialize_with = "deserialize_count")]
    pub male: u64,
    /// Female count
    #[serde(default, deserialize_with = "deserialize_count")]
    pub female: u64,
    /// Total count (`male + female` in source records)
    #[serde(default, deserialize_with = "deserialize_count")]
    pub total: u64,
    /// Male share of this bracket, in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub male_percent: Option<f64>,
    /// Female share of this bracket, in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub female_percent: Option<f64>,
    /// Share of the whole population in this bracket, in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_percent: Option<f64>,
}

impl AgeGroupRecord {
    /// Create a bracket with `total = male + female`
    #[must_use]
    pub fn new(age_range: impl Into<String>, male: u64, female: u64) -> Self {
        Self {
            age_range: age_range.into(),
            male,
            female,
            total: male + female,
            male_percent: None,
            female_percent: None,
            total_percent: None,
        }
    }

    /// Create an empty bracket
    #[must_use]
    pub fn zeroed(age_range: impl Into<String>) -> Self {
        Self::new(age_range, 0, 0)
    }

    /// Total count, falling back to `male + female` when `total` is missing
    #[must_use]
    pub fn effective_total(&self) -> u64 {
        if self.total > 0 {
            self.total
        } else {
            self.male + self.female
        }
    }
}

/// Whether `label` is one of the 0-14 youth brackets
#[must_use]
pub fn is_youth_range(label: &str) -> bool {
    YOUTH_RANGES.contains(&label)
}

/// Whether `label` contains any of the elderly decade markers.
///
/// Plain substring containment: "165-169" would match too. Kept this way so
/// rankings agree with the published tables; use [`is_elderly_range`] when the
/// numeric bound matters.
#[must_use]
pub fn matches_elderly_marker(label: &str) -> bool {
    ELDERLY_DECADE_MARKERS
        .iter()
        .any(|marker| label.contains(marker))
}

/// Parse the lower bound of labels like `"65-69"`, `"100+"` or `"85+"`
#[must_use]
pub fn lower_bound(label: &str) -> Option<u32> {
    let digits: &str = label
        .trim()
        .split(|c: char| c == '-' || c == '+')
        .next()?
        .trim();
    digits.parse().ok()
}

/// Whether the bracket starts at or above 65
#[must_use]
pub fn is_elderly_range(label: &str) -> bool {
    lower_bound(label).is_some_and(|age| age >= ELDERLY_MIN_AGE)
}

/// Sum bracket totals whose label satisfies `predicate`
pub fn sum_totals<'a, I, P>(groups: I, predicate: P) -> u64
where
    I: IntoIterator<Item = &'a AgeGroupRecord>,
    P: Fn(&str) -> bool,
{
    groups
        .into_iter()
        .filter(|group| predicate(&group.age_range))
        .map(|group| group.total)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_bound() {
        assert_eq!(lower_bound("0-4"), Some(0));
        assert_eq!(lower_bound("65-69"), Some(65));
        assert_eq!(lower_bound("100+"), Some(100));
        assert_eq!(lower_bound("85+"), Some(85));
        assert_eq!(lower_bound("unknown"), None);
        assert_eq!(lower_bound(""), None);
    }

    #[test]
    fn test_elderly_marker_is_substring_based() {
        assert!(matches_elderly_marker("65-69"));
        assert!(matches_elderly_marker("100+"));
        assert!(!matches_elderly_marker("60-64"));
        assert!(!matches_elderly_marker("15-19"));
        // Latent caveat of substring matching
        assert!(matches_elderly_marker("165-169"));
        assert!(is_elderly_range("165-169"));
        assert!(!is_elderly_range("60-64"));
    }

    #[test]
    fn test_marker_and_bound_agree_on_standard_ranges() {
        for label in AGE_RANGES {
            assert_eq!(
                matches_elderly_marker(label),
                is_elderly_range(label),
                "label {label}"
            );
        }
    }

    #[test]
    fn test_youth_and_elderly_are_disjoint() {
        let youth = AGE_RANGES.iter().filter(|r| is_youth_range(r)).count();
        let elderly = AGE_RANGES.iter().filter(|r| is_elderly_range(r)).count();
        assert_eq!(youth, 3);
        assert_eq!(elderly, 8);
        assert!(!AGE_RANGES.iter().any(|r| is_youth_range(r) && is_elderly_range(r)));
    }

    #[test]
    fn test_effective_total() {
        let mut group = AgeGroupRecord::new("20-24", 10, 12);
        assert_eq!(group.effective_total(), 22);
        group.total = 0;
        assert_eq!(group.effective_total(), 22);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let group: AgeGroupRecord = serde_json::from_str(
            r#"{"ageRange":"0-4","male":5,"female":6,"total":11,"malePercent":45.4}"#,
        )
        .unwrap();
        assert_eq!(group.age_range, "0-4");
        assert_eq!(group.total, 11);
        assert_eq!(group.male_percent, Some(45.4));
        assert_eq!(group.total_percent, None);
    }

    #[test]
    fn test_whole_float_counts_are_accepted() {
        let group: AgeGroupRecord =
            serde_json::from_str(r#"{"ageRange":"0-4","male":1.0,"female":2,"total":3.0}"#)
                .unwrap();
        assert_eq!((group.male, group.female, group.total), (1, 2, 3));

        for bad in [r#"{"male":1.5}"#, r#"{"male":-1}"#, r#"{"male":null}"#] {
            assert!(serde_json::from_str::<AgeGroupRecord>(bad).is_err(), "{bad}");
        }
    }
}
