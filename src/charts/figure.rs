//! Plotly figure encoding.
//!
//! Charts are handed to the browser as Plotly `{data, layout}` objects;
//! drawing is left entirely to Plotly.js.

use super::{PieChart, ScatterChart};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A Plotly figure: a list of traces plus the layout object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Value>,
    pub layout: Value,
}

impl From<&PieChart> for Figure {
    fn from(chart: &PieChart) -> Self {
        let labels: Vec<Value> = chart
            .slices
            .iter()
            .map(|slice| json!(slice.label))
            .collect();
        let values: Vec<usize> = chart.slices.iter().map(|slice| slice.count).collect();

        let trace = json!({
            "type": "pie",
            "labels": labels,
            "values": values,
            "hovertemplate": format!("{}=%{{label}}<br>count=%{{value}}<extra></extra>", chart.names_label),
        });

        Figure {
            data: vec![trace],
            layout: json!({
                "title": { "text": chart.title },
                "legend": { "title": { "text": chart.names_label }, "tracegroupgap": 0 },
            }),
        }
    }
}

impl From<&ScatterChart> for Figure {
    fn from(chart: &ScatterChart) -> Self {
        let data = chart
            .series
            .iter()
            .map(|series| {
                let x: Vec<f64> = series.points.iter().map(|p| p.payload_mass_kg).collect();
                let y: Vec<u8> = series.points.iter().map(|p| p.outcome.code()).collect();

                json!({
                    "type": "scatter",
                    "mode": "markers",
                    "name": series.category,
                    "legendgroup": series.category,
                    "x": x,
                    "y": y,
                    "hovertemplate": format!(
                        "{}={}<br>{}=%{{x}}<br>{}=%{{y}}<extra></extra>",
                        chart.color_label, series.category, chart.x_label, chart.y_label
                    ),
                })
            })
            .collect();

        Figure {
            data,
            layout: json!({
                "title": { "text": chart.title },
                "xaxis": { "title": { "text": chart.x_label } },
                "yaxis": { "title": { "text": chart.y_label } },
                "legend": { "title": { "text": chart.color_label }, "tracegroupgap": 0 },
            }),
        }
    }
}
