//! Aggregate case counts across a location array.

use crate::model::{Latest, Location, Metric};

/// Per-metric sums over a set of locations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals(Latest);

impl Totals {
    /// Sum every metric across `locations`.
    pub fn from_locations(locations: &[Location]) -> Self {
        Self(Latest {
            confirmed: sum_metric(locations, Metric::Confirmed),
            recovered: sum_metric(locations, Metric::Recovered),
            deaths: sum_metric(locations, Metric::Deaths),
        })
    }

    pub fn get(&self, metric: Metric) -> u64 {
        self.0.get(metric)
    }

    /// Metrics in display order with their sums.
    pub fn iter(&self) -> impl Iterator<Item = (Metric, u64)> + '_ {
        Metric::ALL.into_iter().map(|m| (m, self.get(m)))
    }
}

/// Sum a single metric across `locations`.
///
/// Saturates instead of wrapping so a corrupt payload cannot panic the UI.
pub fn sum_metric(locations: &[Location], metric: Metric) -> u64 {
    locations
        .iter()
        .fold(0u64, |sum, location| sum.saturating_add(location.latest.get(metric)))
}
