//! HTTP handlers

use super::error::{ApiError, ApiResult};
use super::page;
use super::state::AppState;
use crate::charts::Figure;
use crate::dashboard::{ControlEvent, ControlState, DashboardLayout};
use crate::models::{PayloadRange, SiteSelection};
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};

/// Dashboard page
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(page::render(state.dashboard.title()))
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: i64,
    pub records: usize,
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime_seconds: state.uptime_seconds(),
        records: state.dashboard.dataset().len(),
    })
}

/// Page layout with initial figures
pub async fn layout(State(state): State<AppState>) -> Json<DashboardLayout> {
    let controls = state.dashboard.initial_controls();
    Json(state.dashboard.layout(&controls))
}

/// Control change sent by the page
#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    /// Control values the page currently shows; defaults to the initial ones
    #[serde(default)]
    pub controls: Option<ControlState>,
    pub event: ControlEvent,
}

/// Re-rendered graph plus the control values after the event
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub target: String,
    pub figure: Figure,
    pub controls: ControlState,
}

/// Apply a control event and return the graph it affects
pub async fn update(
    State(state): State<AppState>,
    Json(request): Json<UpdateRequest>,
) -> Json<UpdateResponse> {
    let mut controls = request
        .controls
        .unwrap_or_else(|| state.dashboard.initial_controls());

    let update = state.dashboard.dispatch(&mut controls, request.event);

    Json(UpdateResponse {
        target: update.target().to_string(),
        figure: update.figure(),
        controls,
    })
}

/// Pie chart query parameters
#[derive(Debug, Deserialize)]
pub struct PieQuery {
    pub site: Option<String>,
}

/// Pie chart for a site selection (all sites when omitted)
pub async fn pie_chart(
    State(state): State<AppState>,
    Query(query): Query<PieQuery>,
) -> Json<Figure> {
    let selection = query
        .site
        .map(SiteSelection::from)
        .unwrap_or_default();

    Json(Figure::from(&state.dashboard.render_pie(&selection)))
}

/// Scatter chart query parameters
#[derive(Debug, Deserialize)]
pub struct ScatterQuery {
    pub low: Option<f64>,
    pub high: Option<f64>,
}

/// Scatter chart for a payload range (dataset bounds fill missing ends)
pub async fn scatter_chart(
    State(state): State<AppState>,
    Query(query): Query<ScatterQuery>,
) -> ApiResult<Json<Figure>> {
    let bounds = state.dashboard.dataset().payload_bounds();
    let range = PayloadRange::new(
        query.low.unwrap_or(bounds.low),
        query.high.unwrap_or(bounds.high),
    );

    if !range.low.is_finite() || !range.high.is_finite() {
        return Err(ApiError::BadRequest(format!(
            "payload range must be finite, got {}",
            range
        )));
    }

    Ok(Json(Figure::from(&state.dashboard.render_scatter(range))))
}
