//! Data models for the launch dashboard.
//!
//! This module contains the core data structures shared by the loader,
//! the chart transforms and the HTTP layer: launch records, the control
//! values a user can pick, and the aggregated rows handed to the charts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dropdown value that selects every launch site at once.
pub const ALL_SITES: &str = "All";

/// Binary outcome of a launch, stored as `0`/`1` in the `class` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum OutcomeClass {
    /// The launch failed (`class == 0`).
    Failure,
    /// The launch succeeded (`class == 1`).
    Success,
}

impl OutcomeClass {
    /// Returns the numeric class code used in the dataset.
    pub fn code(self) -> u8 {
        match self {
            OutcomeClass::Failure => 0,
            OutcomeClass::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == OutcomeClass::Success
    }
}

impl TryFrom<u8> for OutcomeClass {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(OutcomeClass::Failure),
            1 => Ok(OutcomeClass::Success),
            other => Err(format!("outcome class must be 0 or 1, got {}", other)),
        }
    }
}

impl From<OutcomeClass> for u8 {
    fn from(outcome: OutcomeClass) -> Self {
        outcome.code()
    }
}

impl fmt::Display for OutcomeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One row of the launch dataset.
///
/// Field names follow the column headers of the source CSV. Columns not
/// listed here (such as the pandas index column) are ignored on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    /// Sequential flight number, when the source carries it.
    #[serde(
        rename = "Flight Number",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub flight_number: Option<u32>,
    /// Launch site identifier (e.g. `CCAFS LC-40`).
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    /// Launch outcome.
    #[serde(rename = "class")]
    pub outcome: OutcomeClass,
    /// Payload mass in kilograms.
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    /// Exact booster version, when the source carries it.
    #[serde(
        rename = "Booster Version",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub booster_version: Option<String>,
    /// Booster family used to color the scatter plot (e.g. `FT`, `B5`).
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
}

impl LaunchRecord {
    /// Creates a record with only the columns the charts need.
    #[cfg(test)]
    pub fn new(site: &str, payload_mass_kg: f64, outcome: OutcomeClass, category: &str) -> Self {
        Self {
            flight_number: None,
            launch_site: site.to_string(),
            outcome,
            payload_mass_kg,
            booster_version: None,
            booster_version_category: category.to_string(),
        }
    }
}

/// Value of the site dropdown.
///
/// Serialized as the plain dropdown token: `"All"` or a site identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    /// Aggregate successes across every site.
    #[default]
    All,
    /// Break down outcomes for a single site.
    Site(String),
}

impl SiteSelection {
    /// Returns the dropdown token for this selection.
    pub fn as_str(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(site) => site,
        }
    }
}

impl From<&str> for SiteSelection {
    fn from(token: &str) -> Self {
        if token == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(token.to_string())
        }
    }
}

impl From<String> for SiteSelection {
    fn from(token: String) -> Self {
        if token == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(token)
        }
    }
}

impl From<SiteSelection> for String {
    fn from(selection: SiteSelection) -> Self {
        match selection {
            SiteSelection::All => ALL_SITES.to_string(),
            SiteSelection::Site(site) => site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive payload-mass interval picked on the range slider.
///
/// Serialized as a two-element array `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Returns true if `mass` lies within the range, both ends included.
    ///
    /// An inverted range (`low > high`) contains nothing.
    pub fn contains(&self, mass: f64) -> bool {
        self.low <= mass && mass <= self.high
    }

    pub fn is_inverted(&self) -> bool {
        self.low > self.high
    }
}

impl From<[f64; 2]> for PayloadRange {
    fn from([low, high]: [f64; 2]) -> Self {
        Self { low, high }
    }
}

impl From<PayloadRange> for [f64; 2] {
    fn from(range: PayloadRange) -> Self {
        [range.low, range.high]
    }
}

impl fmt::Display for PayloadRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

/// Category of a pie slice: a launch site or an outcome class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SliceLabel {
    Site(String),
    Outcome(OutcomeClass),
}

impl fmt::Display for SliceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliceLabel::Site(site) => f.write_str(site),
            SliceLabel::Outcome(outcome) => write!(f, "{}", outcome),
        }
    }
}

/// One aggregated pie-chart row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SliceCount {
    pub label: SliceLabel,
    pub count: usize,
}

impl SliceCount {
    pub fn site(site: &str, count: usize) -> Self {
        Self {
            label: SliceLabel::Site(site.to_string()),
            count,
        }
    }

    pub fn outcome(outcome: OutcomeClass, count: usize) -> Self {
        Self {
            label: SliceLabel::Outcome(outcome),
            count,
        }
    }
}

/// Launch totals for one site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteSummary {
    pub site: String,
    pub launches: usize,
    pub successes: usize,
}

impl SiteSummary {
    /// Fraction of launches that succeeded, in `0.0..=1.0`.
    pub fn success_rate(&self) -> f64 {
        if self.launches == 0 {
            0.0
        } else {
            self.successes as f64 / self.launches as f64
        }
    }
}
