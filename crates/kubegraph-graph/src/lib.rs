//! Graph element construction for kubegraph
//!
//! This crate turns a cluster snapshot into the flat, ordered element
//! sequence the rendering widget consumes.

mod builder;

pub use builder::build_elements;

// Re-export types that are used in our public API
pub use kubegraph_types::{ClusterSnapshot, GraphElement};
