//! Chart descriptions.
//!
//! Turns transform output into declarative chart structures: titles,
//! axis labels and the series to plot. [`Figure`] encodes them for
//! Plotly.js.

mod figure;

pub use figure::Figure;

use crate::analysis::{payload_outcome_slice, site_success_summary};
use crate::models::{LaunchRecord, OutcomeClass, PayloadRange, SiteSelection, SliceCount};
use serde::Serialize;

const ALL_SITES_TITLE: &str = "Total Success Launches By Site";
const SCATTER_TITLE: &str = "Correlation between Payload and Success for all Sites";
const SITE_LABEL: &str = "Launch Site";
const OUTCOME_LABEL: &str = "Launch Outcome";
const PAYLOAD_LABEL: &str = "Payload Mass (kg)";
const CATEGORY_LABEL: &str = "Booster Version Category";

/// Pie chart of launch outcomes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    /// Label of the column the slices are named after.
    pub names_label: String,
    pub slices: Vec<SliceCount>,
}

impl PieChart {
    /// Sum of all slice counts.
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }
}

/// A single scatter point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome: OutcomeClass,
}

/// Points sharing one booster version category (one legend entry).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub category: String,
    pub points: Vec<ScatterPoint>,
}

/// Scatter plot of payload mass against outcome, colored by booster category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub color_label: String,
    pub series: Vec<ScatterSeries>,
}

impl ScatterChart {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

/// Build the pie chart for a dropdown selection.
pub fn pie_chart(records: &[LaunchRecord], selection: &SiteSelection) -> PieChart {
    let slices = site_success_summary(records, selection);

    match selection {
        SiteSelection::All => PieChart {
            title: ALL_SITES_TITLE.to_string(),
            names_label: SITE_LABEL.to_string(),
            slices,
        },
        SiteSelection::Site(site) => PieChart {
            title: format!("Success and Failure Launches for site {}", site),
            names_label: OUTCOME_LABEL.to_string(),
            slices,
        },
    }
}

/// Build the scatter chart for a payload range.
///
/// Series appear in the order their category is first seen in the
/// filtered rows; points keep row order within a series.
pub fn scatter_chart(records: &[LaunchRecord], range: PayloadRange) -> ScatterChart {
    let mut series: Vec<ScatterSeries> = Vec::new();

    for record in payload_outcome_slice(records, range) {
        let point = ScatterPoint {
            payload_mass_kg: record.payload_mass_kg,
            outcome: record.outcome,
        };

        match series
            .iter_mut()
            .find(|s| s.category == record.booster_version_category)
        {
            Some(existing) => existing.points.push(point),
            None => series.push(ScatterSeries {
                category: record.booster_version_category.clone(),
                points: vec![point],
            }),
        }
    }

    ScatterChart {
        title: SCATTER_TITLE.to_string(),
        x_label: PAYLOAD_LABEL.to_string(),
        y_label: OUTCOME_LABEL.to_string(),
        color_label: CATEGORY_LABEL.to_string(),
        series,
    }
}
