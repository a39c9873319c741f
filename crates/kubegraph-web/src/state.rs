use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use kubegraph_types::{ClusterSnapshot, GraphElement, GraphLayout};

/// Resource counts and capture time for the rendered snapshot
#[derive(Clone, Copy, Debug, Serialize)]
pub struct SnapshotSummary {
    pub nodes: usize,
    pub pods: usize,
    pub services: usize,
    pub taken_at: DateTime<Utc>,
}

impl SnapshotSummary {
    /// Summarize a cluster snapshot
    pub fn of(snapshot: &ClusterSnapshot) -> Self {
        Self {
            nodes: snapshot.nodes.len(),
            pods: snapshot.pods.len(),
            services: snapshot.services.len(),
            taken_at: snapshot.taken_at,
        }
    }
}

/// Immutable state shared with every dashboard request handler
///
/// Assembled once by the host's initialize step and never mutated; the
/// element sequence the handlers serve is the one built at startup.
#[derive(Clone, Debug)]
pub struct DashboardState {
    pub title: String,
    pub default_layout: GraphLayout,
    pub summary: SnapshotSummary,
    pub elements: Arc<Vec<GraphElement>>,
}

impl DashboardState {
    pub fn new(
        title: String,
        default_layout: GraphLayout,
        summary: SnapshotSummary,
        elements: Vec<GraphElement>,
    ) -> Self {
        Self {
            title,
            default_layout,
            summary,
            elements: Arc::new(elements),
        }
    }
}
