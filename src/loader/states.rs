//! US state records
//!
//! States use the same snapshot shape as countries but are never part of the
//! world aggregation.

use crate::error::util::read_json;
use crate::error::{Error, Result};
use crate::loader::json::{JsonDataSource, ensure_valid_slug};
use crate::models::{State, StatePopulationSeries, YearSnapshot};
use crate::utils::logging::{log_path_operation_start, log_warning};

impl JsonDataSource {
    /// Enumerate the US state roster
    pub fn load_states(&self) -> Result<Vec<State>> {
        let path = self.config().states_path();
        log_path_operation_start("Loading state roster from", &path);
        read_json(&path, "state roster")
    }

    /// Load the series for one state slug, exactly as stored
    pub fn load_state_data(&self, slug: &str) -> Result<StatePopulationSeries> {
        ensure_valid_slug(slug)?;
        let path = self.config().state_path(slug);
        let series: StatePopulationSeries =
            read_json(&path, "state population data").map_err(|e| match e {
                Error::NotFound(_) => Error::NotFound(format!("State data not found: {slug}")),
                other => other,
            })?;

        for rejected in &series.rejected_years {
            log_warning(
                &format!("Ignoring malformed year {:?} ({})", rejected.key, rejected.reason),
                Some(slug),
            );
        }
        Ok(series)
    }

    /// Load the series for one state slug with every year passed through
    /// [`clean_state_year_data`]
    pub fn load_clean_state_data(&self, slug: &str) -> Result<StatePopulationSeries> {
        let mut series = self.load_state_data(slug)?;
        for snapshot in series.years.values_mut() {
            *snapshot = clean_state_year_data(snapshot);
        }
        Ok(series)
    }
}

/// Repair the broken elderly tail found in some state records.
///
/// The faulty pattern: 90-94 and 95-99 are both empty while 100+ repeats the
/// 85-89 total. In that case the three upper buckets are dropped and 85-89
/// becomes `85+`. Any other snapshot is returned unchanged.
#[must_use]
pub fn clean_state_year_data(snapshot: &YearSnapshot) -> YearSnapshot {
    let (Some(g85), Some(g90), Some(g95), Some(g100)) = (
        snapshot.age_group("85-89"),
        snapshot.age_group("90-94"),
        snapshot.age_group("95-99"),
        snapshot.age_group("100+"),
    ) else {
        return snapshot.clone();
    };

    if g90.total != 0 || g95.total != 0 || g100.total != g85.total {
        return snapshot.clone();
    }

    log::debug!("Collapsing duplicated elderly tail for year {}", snapshot.year);
    let age_groups = snapshot
        .age_groups
        .iter()
        .filter(|group| !matches!(group.age_range.as_str(), "90-94" | "95-99" | "100+"))
        .map(|group| {
            let mut group = group.clone();
            if group.age_range == "85-89" {
                group.age_range = "85+".to_string();
            }
            group
        })
        .collect();

    YearSnapshot {
        age_groups,
        ..snapshot.clone()
    }
}
