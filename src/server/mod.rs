//! HTTP server setup and lifecycle management

mod error;
mod handlers;
mod page;
mod router;
mod state;

use crate::dashboard::Dashboard;
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use router::create_router;
use state::AppState;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Dashboard HTTP server
pub struct Server {
    dashboard: Arc<Dashboard>,
    addr: SocketAddr,
}

impl Server {
    pub fn new(dashboard: Arc<Dashboard>, addr: SocketAddr) -> Self {
        Self { dashboard, addr }
    }

    /// Bind the listener and serve until a shutdown signal arrives
    pub async fn run(self) -> Result<()> {
        let app = create_router(AppState::new(self.dashboard));

        let listener = TcpListener::bind(self.addr)
            .await
            .with_context(|| format!("Failed to bind {}", self.addr))?;

        info!("Dashboard listening on http://{}", self.addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server failed")?;

        info!("Dashboard shut down");
        Ok(())
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
