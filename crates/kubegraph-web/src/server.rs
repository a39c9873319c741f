use anyhow::{Context, Result};
use tracing::info;

use crate::config::DashboardConfig;
use crate::routes;
use crate::state::DashboardState;

/// Dashboard HTTP server
pub struct DashboardServer {
    config: DashboardConfig,
    state: DashboardState,
}

impl DashboardServer {
    /// Create a server for an initialized dashboard state
    pub fn new(config: DashboardConfig, state: DashboardState) -> Self {
        Self { config, state }
    }

    /// Bind and serve until the process is terminated
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.listen_addr();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .context(format!("Failed to bind dashboard address: {}", addr))?;

        info!(%addr, "dashboard listening");

        axum::serve(listener, routes::router(self.state))
            .await
            .context("Dashboard server terminated unexpectedly")?;

        Ok(())
    }
}
