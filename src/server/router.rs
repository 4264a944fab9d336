//! HTTP router configuration

use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Create the dashboard router
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/layout", get(handlers::layout))
        .route("/update", post(handlers::update))
        .route("/charts/pie", get(handlers::pie_chart))
        .route("/charts/scatter", get(handlers::scatter_chart));

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
