//! Kubernetes client for kubegraph
//!
//! This crate provides Kubernetes API integration for reading kubeconfig
//! contexts and taking the one-shot topology snapshot the dashboard renders.

mod client;

pub use client::KubeClient;

// Re-export types that are used in our public API
pub use kubegraph_types::{ClusterSnapshot, ContextInfo, PodPlacement};
