//! tree9s Library
//!
//! This library provides the core functionality for the tree9s TUI
//! application: the resource-tree view-model layer, snapshot acquisition,
//! and the terminal UI. It can be used both as a binary and as a library
//! for testing.

pub mod config;
pub mod kube;
pub mod models;
pub mod snapshot;
pub mod tree;
#[cfg(feature = "tui")]
pub mod tui;

// Re-export commonly used types for convenience
pub use models::{
    classify, AggregationCategory, HealthInfo, ParentRef, PodMetadata, ResourceNode,
    ResourceTreeResponse,
};
pub use snapshot::{
    create_source, refresh_once, spawn_refresh, RefreshEvent, SnapshotError, SnapshotResult,
    SnapshotSource, SnapshotStore,
};
pub use tree::{
    build_tree, filter_nodes, render_ascii, resolve_pod_parents, DisplayTreeNode, ExpandedNodes,
    HealthStatus, NodeFilter, StatusSummary,
};
