//! Request handlers for the dashboard API
//!
//! The two interactive contracts are deliberately pass-through: layout
//! selection maps a name 1:1 to the renderer's layout parameter, and the
//! node-detail endpoint echoes the clicked vertex's fields as text.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::Html;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kubegraph_types::{GraphElement, GraphLayout, ResourceKind};

use crate::error::DashboardError;
use crate::html::DASHBOARD_HTML;
use crate::state::DashboardState;

/// Serve the embedded dashboard page
pub async fn index() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

/// Serve the ordered graph element sequence
pub async fn elements(State(state): State<DashboardState>) -> Json<Vec<GraphElement>> {
    Json(state.elements.as_ref().clone())
}

/// Response body for the snapshot summary endpoint
#[derive(Clone, Debug, Serialize)]
pub struct SnapshotResponse {
    pub title: String,
    pub default_layout: &'static str,
    pub nodes: usize,
    pub pods: usize,
    pub services: usize,
    pub taken_at: DateTime<Utc>,
}

/// Serve the snapshot summary shown in the dashboard header
pub async fn snapshot(State(state): State<DashboardState>) -> Json<SnapshotResponse> {
    Json(SnapshotResponse {
        title: state.title.clone(),
        default_layout: state.default_layout.as_str(),
        nodes: state.summary.nodes,
        pods: state.summary.pods,
        services: state.summary.services,
        taken_at: state.summary.taken_at,
    })
}

/// Renderer layout parameter for a selected layout
///
/// Carries exactly the layout name and nothing else.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LayoutConfig {
    pub name: &'static str,
}

/// Map a layout to the renderer's layout parameter
pub fn layout_config(layout: GraphLayout) -> LayoutConfig {
    LayoutConfig {
        name: layout.as_str(),
    }
}

/// Map a selected layout name to the renderer layout configuration
pub async fn layout(Path(name): Path<String>) -> Result<Json<LayoutConfig>, DashboardError> {
    let layout: GraphLayout = name
        .parse()
        .map_err(|_| DashboardError::UnknownLayout(name.clone()))?;
    Ok(Json(layout_config(layout)))
}

/// Query parameters of the node detail endpoint
#[derive(Debug, Deserialize)]
pub struct DetailQuery {
    pub id: String,
    pub kind: ResourceKind,
}

/// Render the clicked vertex's fields as plain text
pub async fn detail(Query(query): Query<DetailQuery>) -> String {
    detail_text(&query.id, query.kind)
}

/// Detail panel text for a vertex: its id and kind, nothing computed
pub fn detail_text(id: &str, kind: ResourceKind) -> String {
    format!("ID: {}\nType: {}", id, kind.as_str())
}
