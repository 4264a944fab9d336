//! Application state for HTTP handlers

use crate::dashboard::Dashboard;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// The dashboard, holding the read-only dataset
    pub dashboard: Arc<Dashboard>,

    /// Server version
    pub version: String,

    /// Server start time
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create new application state
    pub fn new(dashboard: Arc<Dashboard>) -> Self {
        Self {
            dashboard,
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at: Utc::now(),
        }
    }

    /// Seconds elapsed since the server started
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}
