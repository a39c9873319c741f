//! Shared types for kubegraph
//!
//! This crate contains data structures used across multiple kubegraph crates:
//! the cluster snapshot, the graph element sequence handed to the rendering
//! widget, and the layout selection offered by the dashboard.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Kubernetes Resource Types
// ============================================================================

/// Kubernetes context information
#[derive(Clone, Debug)]
pub struct ContextInfo {
    pub name: String,
    pub cluster: String,
    pub is_current: bool,
}

impl ContextInfo {
    pub fn new(name: String, cluster: String, is_current: bool) -> Self {
        Self {
            name,
            cluster,
            is_current,
        }
    }
}

/// A pod name and the name of the cluster node it is scheduled on
///
/// An unscheduled pod carries no node name; nothing downstream special-cases
/// that, the resulting edge simply gets an empty source id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PodPlacement {
    pub name: String,
    pub node_name: Option<String>,
}

impl PodPlacement {
    pub fn new(name: String, node_name: Option<String>) -> Self {
        Self { name, node_name }
    }
}

/// Point-in-time view of the cluster resources shown on the dashboard
///
/// Taken once at startup and never refreshed; the three lists come from
/// independent API calls and may each observe a slightly different instant
/// of cluster state.
#[derive(Clone, Debug)]
pub struct ClusterSnapshot {
    pub nodes: Vec<String>,
    pub pods: Vec<PodPlacement>,
    pub services: Vec<String>,
    pub taken_at: DateTime<Utc>,
}

impl ClusterSnapshot {
    pub fn new(nodes: Vec<String>, pods: Vec<PodPlacement>, services: Vec<String>) -> Self {
        Self {
            nodes,
            pods,
            services,
            taken_at: Utc::now(),
        }
    }
}

// ============================================================================
// Graph Element Types
// ============================================================================

/// Kind of cluster resource a vertex stands for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceKind {
    ClusterNode,
    Pod,
    Service,
}

impl ResourceKind {
    /// Display string shown in the detail panel
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClusterNode => "ClusterNode",
            Self::Pod => "Pod",
            Self::Service => "Service",
        }
    }

    /// Stylesheet class the rendering widget selects on
    pub fn class(&self) -> &'static str {
        match self {
            Self::ClusterNode => "node",
            Self::Pod => "pod",
            Self::Service => "service",
        }
    }
}

/// Payload of a vertex element, in the shape the rendering widget expects
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VertexData {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
}

/// A graph vertex for one named cluster resource
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VertexElement {
    pub data: VertexData,
    pub classes: &'static str,
}

/// Payload of an edge element
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EdgeData {
    pub source: String,
    pub target: String,
}

/// An edge between two vertex ids, with no identity of its own
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EdgeElement {
    pub data: EdgeData,
}

/// One element of the ordered sequence consumed by the rendering widget
///
/// Serializes to the widget's element records: `{"data": {"id", "label",
/// "type"}, "classes": …}` for vertices and `{"data": {"source", "target"}}`
/// for edges.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GraphElement {
    Vertex(VertexElement),
    Edge(EdgeElement),
}

impl GraphElement {
    /// Build a vertex element for a named resource
    ///
    /// The name doubles as id and display label.
    pub fn vertex(name: String, kind: ResourceKind) -> Self {
        Self::Vertex(VertexElement {
            data: VertexData {
                id: name.clone(),
                label: name,
                kind,
            },
            classes: kind.class(),
        })
    }

    /// Build an edge element between two vertex ids
    pub fn edge(source: String, target: String) -> Self {
        Self::Edge(EdgeElement {
            data: EdgeData { source, target },
        })
    }

    /// Whether this element is a vertex
    pub fn is_vertex(&self) -> bool {
        matches!(self, Self::Vertex(_))
    }

    /// Whether this element is an edge
    pub fn is_edge(&self) -> bool {
        matches!(self, Self::Edge(_))
    }
}

// ============================================================================
// Layout Types
// ============================================================================

/// Layout strategy selectable in the dashboard
///
/// Each value maps 1:1 to a layout name understood by the rendering widget;
/// no layout computation happens on this side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphLayout {
    Grid,
    #[default]
    Circle,
    Breadthfirst,
    Random,
}

impl GraphLayout {
    /// All selectable layouts, in dropdown order
    pub fn all() -> [GraphLayout; 4] {
        [Self::Grid, Self::Circle, Self::Breadthfirst, Self::Random]
    }

    /// Layout name passed to the rendering widget
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Circle => "circle",
            Self::Breadthfirst => "breadthfirst",
            Self::Random => "random",
        }
    }

    /// Human-facing label for the layout dropdown
    pub fn label(&self) -> &'static str {
        match self {
            Self::Grid => "Grid",
            Self::Circle => "Circle",
            Self::Breadthfirst => "Breadthfirst",
            Self::Random => "Random",
        }
    }
}

impl FromStr for GraphLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grid" => Ok(Self::Grid),
            "circle" => Ok(Self::Circle),
            "breadthfirst" => Ok(Self::Breadthfirst),
            "random" => Ok(Self::Random),
            other => Err(format!("unknown layout '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_name_round_trip() {
        for layout in GraphLayout::all() {
            assert_eq!(layout.as_str().parse::<GraphLayout>(), Ok(layout));
        }
    }

    #[test]
    fn test_layout_unknown_name() {
        assert!("cose".parse::<GraphLayout>().is_err());
        assert!("Grid".parse::<GraphLayout>().is_err());
    }

    #[test]
    fn test_layout_default_is_circle() {
        assert_eq!(GraphLayout::default(), GraphLayout::Circle);
    }

    #[test]
    fn test_vertex_serialization_shape() {
        let vertex = GraphElement::vertex("n1".to_string(), ResourceKind::ClusterNode);
        let value = serde_json::to_value(&vertex).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "data": {"id": "n1", "label": "n1", "type": "ClusterNode"},
                "classes": "node",
            })
        );
    }

    #[test]
    fn test_edge_serialization_shape() {
        let edge = GraphElement::edge("svc1".to_string(), "p1".to_string());
        let value = serde_json::to_value(&edge).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"data": {"source": "svc1", "target": "p1"}})
        );
    }

    #[test]
    fn test_kind_classes() {
        assert_eq!(ResourceKind::ClusterNode.class(), "node");
        assert_eq!(ResourceKind::Pod.class(), "pod");
        assert_eq!(ResourceKind::Service.class(), "service");
    }
}
