//! Page layout description.
//!
//! Served to the browser on load so the page can build its controls
//! and draw the first pair of graphs without further requests.

use super::{
    ControlState, Dashboard, PAYLOAD_SLIDER_ID, PIE_GRAPH_ID, SCATTER_GRAPH_ID, SITE_DROPDOWN_ID,
};
use crate::charts::Figure;
use crate::models::{PayloadRange, SiteSelection, ALL_SITES};
use serde::Serialize;

const DROPDOWN_PLACEHOLDER: &str = "Select a Launch Site here";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

/// The launch site selector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dropdown {
    pub id: &'static str,
    pub options: Vec<DropdownOption>,
    pub value: SiteSelection,
    pub placeholder: &'static str,
    pub searchable: bool,
}

/// A labelled tick on the range slider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderMark {
    pub value: u32,
    pub label: String,
}

/// The payload mass range slider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeSlider {
    pub id: &'static str,
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub marks: Vec<SliderMark>,
    pub value: PayloadRange,
}

/// A graph element with its current figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Graph {
    pub id: &'static str,
    pub figure: Figure,
}

/// Everything the page needs to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardLayout {
    pub title: String,
    pub dropdown: Dropdown,
    pub pie: Graph,
    pub slider: RangeSlider,
    pub scatter: Graph,
}

impl DashboardLayout {
    pub(super) fn build(dashboard: &Dashboard, controls: &ControlState) -> Self {
        let dataset = dashboard.dataset();
        let slider = dashboard.slider();

        let options = std::iter::once(ALL_SITES.to_string())
            .chain(dataset.sites().iter().cloned())
            .map(|site| DropdownOption {
                label: site.clone(),
                value: site,
            })
            .collect();

        let marks = (slider.min..=slider.max)
            .step_by(slider.mark_interval as usize)
            .map(|value| SliderMark {
                value,
                label: value.to_string(),
            })
            .collect();

        Self {
            title: dashboard.title().to_string(),
            dropdown: Dropdown {
                id: SITE_DROPDOWN_ID,
                options,
                value: controls.site.clone(),
                placeholder: DROPDOWN_PLACEHOLDER,
                searchable: true,
            },
            pie: Graph {
                id: PIE_GRAPH_ID,
                figure: Figure::from(&dashboard.render_pie(&controls.site)),
            },
            slider: RangeSlider {
                id: PAYLOAD_SLIDER_ID,
                min: slider.min,
                max: slider.max,
                step: slider.step,
                marks,
                value: controls.payload_range,
            },
            scatter: Graph {
                id: SCATTER_GRAPH_ID,
                figure: Figure::from(&dashboard.render_scatter(controls.payload_range)),
            },
        }
    }
}
