//! Model layer
//!
//! Rust types for the resource-tree payload and the fixed kind/category
//! vocabulary the tree view groups by.
//!
//! Structure:
//! - `node.rs` - Wire types for the snapshot payload
//! - `resource_kind.rs` - Known Kubernetes kinds
//! - `category.rs` - Aggregation categories and the kind classifier

pub mod category;
pub mod node;
pub mod resource_kind;

pub use category::{classify, AggregationCategory};
pub use node::{
    HealthInfo, NetworkingInfo, ParentRef, PodMetadata, ResourceNode, ResourceTreeResponse,
};
pub use resource_kind::ResourceKind;
