//! Dashboard state and event dispatch.
//!
//! The page has two controls and two graphs. A control change arrives
//! as a [`ControlEvent`]; [`Dashboard::dispatch`] records the new value
//! in the caller's [`ControlState`] and re-renders the one graph that
//! depends on it. The dataset is shared read-only behind an `Arc`, so
//! any number of callers can dispatch concurrently.

pub mod layout;

pub use layout::DashboardLayout;

use crate::charts::{self, Figure, PieChart, ScatterChart};
use crate::config::SliderConfig;
use crate::dataset::Dataset;
use crate::models::{PayloadRange, SiteSelection};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

pub const SITE_DROPDOWN_ID: &str = "site-dropdown";
pub const PAYLOAD_SLIDER_ID: &str = "payload-slider";
pub const PIE_GRAPH_ID: &str = "success-pie-chart";
pub const SCATTER_GRAPH_ID: &str = "success-payload-scatter-chart";

/// A user interaction with one of the two controls.
///
/// JSON form: `{"control": "site-dropdown", "value": "KSC LC-39A"}` or
/// `{"control": "payload-slider", "value": [2500, 7500]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "control", content = "value", rename_all = "kebab-case")]
pub enum ControlEvent {
    SiteDropdown(SiteSelection),
    PayloadSlider(PayloadRange),
}

/// Current values of the dashboard controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlState {
    pub site: SiteSelection,
    pub payload_range: PayloadRange,
}

impl ControlState {
    /// Store the value carried by `event`.
    pub fn apply(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::SiteDropdown(site) => self.site = site,
            ControlEvent::PayloadSlider(range) => self.payload_range = range,
        }
    }
}

/// A re-rendered graph.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartUpdate {
    Pie(PieChart),
    Scatter(ScatterChart),
}

impl ChartUpdate {
    /// Id of the graph element this update replaces.
    pub fn target(&self) -> &'static str {
        match self {
            ChartUpdate::Pie(_) => PIE_GRAPH_ID,
            ChartUpdate::Scatter(_) => SCATTER_GRAPH_ID,
        }
    }

    pub fn figure(&self) -> Figure {
        match self {
            ChartUpdate::Pie(chart) => Figure::from(chart),
            ChartUpdate::Scatter(chart) => Figure::from(chart),
        }
    }
}

/// The dashboard: the loaded dataset plus page settings.
#[derive(Debug)]
pub struct Dashboard {
    dataset: Arc<Dataset>,
    title: String,
    slider: SliderConfig,
}

impl Dashboard {
    pub fn new(dataset: Arc<Dataset>, title: String, slider: SliderConfig) -> Self {
        Self {
            dataset,
            title,
            slider,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slider(&self) -> &SliderConfig {
        &self.slider
    }

    /// Control values shown on first load: every site, full payload range.
    pub fn initial_controls(&self) -> ControlState {
        ControlState {
            site: SiteSelection::All,
            payload_range: self.dataset.payload_bounds(),
        }
    }

    /// Apply a control event and render the graph that depends on it.
    pub fn dispatch(&self, controls: &mut ControlState, event: ControlEvent) -> ChartUpdate {
        debug!("Dispatching {:?}", event);

        let is_site_event = matches!(event, ControlEvent::SiteDropdown(_));
        controls.apply(event);

        if is_site_event {
            ChartUpdate::Pie(self.render_pie(&controls.site))
        } else {
            ChartUpdate::Scatter(self.render_scatter(controls.payload_range))
        }
    }

    pub fn render_pie(&self, selection: &SiteSelection) -> PieChart {
        if let SiteSelection::Site(site) = selection {
            if !self.dataset.contains_site(site) {
                debug!("Site {:?} is not in the catalog, pie chart will be empty", site);
            }
        }

        let chart = charts::pie_chart(self.dataset.records(), selection);
        debug!(
            "Pie chart for {}: {} slices, {} launches",
            selection,
            chart.slices.len(),
            chart.total()
        );
        chart
    }

    pub fn render_scatter(&self, range: PayloadRange) -> ScatterChart {
        if range.is_inverted() {
            debug!("Payload range {} is inverted, scatter chart will be empty", range);
        }

        let chart = charts::scatter_chart(self.dataset.records(), range);
        debug!(
            "Scatter chart for {}: {} points in {} series",
            range,
            chart.point_count(),
            chart.series.len()
        );
        chart
    }

    /// Describe the whole page, with both graphs rendered for `controls`.
    pub fn layout(&self, controls: &ControlState) -> DashboardLayout {
        DashboardLayout::build(self, controls)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{LaunchRecord, OutcomeClass, SliceCount};

    pub(crate) fn test_dashboard() -> Dashboard {
        let records = vec![
            LaunchRecord::new("A", 500.0, OutcomeClass::Success, "FT"),
            LaunchRecord::new("A", 700.0, OutcomeClass::Failure, "v1.1"),
            LaunchRecord::new("B", 900.0, OutcomeClass::Success, "B5"),
        ];
        let dataset = Dataset::from_records(records).unwrap();
        Dashboard::new(
            Arc::new(dataset),
            "Test Dashboard".to_string(),
            SliderConfig::default(),
        )
    }

    #[test]
    fn test_initial_controls() {
        let dashboard = test_dashboard();
        let controls = dashboard.initial_controls();

        assert_eq!(controls.site, SiteSelection::All);
        assert_eq!(controls.payload_range, PayloadRange::new(500.0, 900.0));
    }

    #[test]
    fn test_dispatch_site_event_updates_pie() {
        let dashboard = test_dashboard();
        let mut controls = dashboard.initial_controls();

        let update = dashboard.dispatch(
            &mut controls,
            ControlEvent::SiteDropdown(SiteSelection::from("A")),
        );

        assert_eq!(controls.site, SiteSelection::from("A"));
        assert_eq!(update.target(), PIE_GRAPH_ID);
        match update {
            ChartUpdate::Pie(chart) => assert_eq!(
                chart.slices,
                vec![
                    SliceCount::outcome(OutcomeClass::Failure, 1),
                    SliceCount::outcome(OutcomeClass::Success, 1),
                ]
            ),
            other => panic!("expected pie update, got {:?}", other),
        }
    }

    #[test]
    fn test_dispatch_slider_event_updates_scatter() {
        let dashboard = test_dashboard();
        let mut controls = dashboard.initial_controls();

        let update = dashboard.dispatch(
            &mut controls,
            ControlEvent::PayloadSlider(PayloadRange::new(600.0, 1000.0)),
        );

        assert_eq!(controls.payload_range, PayloadRange::new(600.0, 1000.0));
        assert_eq!(controls.site, SiteSelection::All);
        assert_eq!(update.target(), SCATTER_GRAPH_ID);
        match update {
            ChartUpdate::Scatter(chart) => assert_eq!(chart.point_count(), 2),
            other => panic!("expected scatter update, got {:?}", other),
        }
    }

    #[test]
    fn test_dispatch_is_repeatable() {
        let dashboard = test_dashboard();
        let mut first = dashboard.initial_controls();
        let mut second = dashboard.initial_controls();
        let event = ControlEvent::SiteDropdown(SiteSelection::All);

        assert_eq!(
            dashboard.dispatch(&mut first, event.clone()),
            dashboard.dispatch(&mut second, event)
        );
        assert_eq!(first, second);
    }

    #[test]
    fn test_control_event_json() {
        let event: ControlEvent =
            serde_json::from_str(r#"{"control": "site-dropdown", "value": "All"}"#).unwrap();
        assert_eq!(event, ControlEvent::SiteDropdown(SiteSelection::All));

        let event: ControlEvent =
            serde_json::from_str(r#"{"control": "payload-slider", "value": [0, 5000]}"#).unwrap();
        assert_eq!(
            event,
            ControlEvent::PayloadSlider(PayloadRange::new(0.0, 5000.0))
        );

        let unknown = r#"{"control": "volume", "value": 3}"#;
        assert!(serde_json::from_str::<ControlEvent>(unknown).is_err());
    }
}
