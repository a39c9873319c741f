//! Web dashboard for kubegraph
//!
//! This crate serves the browser dashboard: the embedded graph page, the
//! element sequence as JSON, and the layout-selection and node-detail
//! contracts the page calls back into.

mod config;
mod error;
mod handlers;
mod html;
mod routes;
mod server;
mod state;

pub use config::DashboardConfig;
pub use error::DashboardError;
pub use handlers::{LayoutConfig, layout_config};
pub use server::DashboardServer;
pub use state::{DashboardState, SnapshotSummary};

// Re-export types that are used in our public API
pub use kubegraph_types::{GraphElement, GraphLayout};
