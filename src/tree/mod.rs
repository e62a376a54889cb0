//! Resource tree view-model layer
//!
//! Pure, synchronous transformations from one flat resource snapshot to the
//! structures the tree view renders. Nothing here performs I/O; every function
//! takes the already-fetched node list and returns a fresh value.
//!
//! Structure:
//! - `status.rs` - Health status precedence and reduction
//! - `parents.rs` - Pod -> top-level controller resolution
//! - `builder.rs` - Category/kind display tree
//! - `instance.rs` - Drill-down object forests
//! - `expand.rs` - Expanded-branch tracking
//! - `filter.rs` - Status and name filtering
//! - `summary.rs` - Status count rollups
//! - `render.rs` - Plain-text tree rendering

pub mod builder;
pub mod expand;
pub mod filter;
pub mod instance;
pub mod parents;
pub mod render;
pub mod status;
pub mod summary;

pub use builder::{build_tree, DisplayTreeNode};
pub use expand::ExpandedNodes;
pub use filter::{filter_nodes, NodeFilter};
pub use instance::{
    instance_trees_for_kind, instance_trees_for_root_name, pods_for_root_name, InstanceNode,
};
pub use parents::resolve_pod_parents;
pub use render::render_ascii;
pub use status::{reduce_all, reduce_status, HealthStatus};
pub use summary::StatusSummary;
