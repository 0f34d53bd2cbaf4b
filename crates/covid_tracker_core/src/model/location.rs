//! Location records as delivered by the statistics API.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::ids::LocationId;

/// The three case counters tracked per location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Confirmed,
    Recovered,
    Deaths,
}

impl Metric {
    /// Display order of the aggregate panel.
    pub const ALL: [Metric; 3] = [Metric::Confirmed, Metric::Recovered, Metric::Deaths];

    /// Field name in the payload.
    pub fn key(&self) -> &'static str {
        match self {
            Metric::Confirmed => "confirmed",
            Metric::Recovered => "recovered",
            Metric::Deaths => "deaths",
        }
    }

    /// Label shown next to the metric: the key with its first letter upper-cased.
    pub fn title(&self) -> String {
        crate::format::capitalize(self.key())
    }
}

/// Latest case counts for a location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Latest {
    #[serde(default)]
    pub confirmed: u64,
    #[serde(default)]
    pub recovered: u64,
    #[serde(default)]
    pub deaths: u64,
}

impl Latest {
    pub fn get(&self, metric: Metric) -> u64 {
        match metric {
            Metric::Confirmed => self.confirmed,
            Metric::Recovered => self.recovered,
            Metric::Deaths => self.deaths,
        }
    }
}

/// A geographic entity with case-count statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub country: String,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub latest: Latest,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<Timestamp>,
}

impl Location {
    pub fn new(id: impl Into<LocationId>, country: &str, province: &str, latest: Latest) -> Self {
        Self {
            id: id.into(),
            country: country.to_string(),
            country_code: String::new(),
            province: province.to_string(),
            latest,
            last_updated: None,
        }
    }

    /// Row title: the country, prefixed by the province when it names a
    /// distinct region.
    pub fn title(&self) -> String {
        if !self.province.is_empty() && self.province != self.country {
            format!("{}, {}", self.province, self.country)
        } else {
            self.country.clone()
        }
    }
}
