//! Node filtering
//!
//! Filters the flat node list by health status and name substring before it
//! reaches the tree builder. An empty filter passes everything, so the
//! unfiltered view is just the identity case.

use serde::{Deserialize, Serialize};

use crate::models::ResourceNode;

/// Status value that disables status filtering
pub const STATUS_ALL: &str = "ALL";

/// Active filter over the node list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeFilter {
    /// Health status to keep; empty or `ALL` keeps everything
    pub status: String,
    /// Case-insensitive name substring; empty keeps everything
    pub search: String,
}

impl NodeFilter {
    pub fn with_status(status: &str) -> Self {
        Self {
            status: status.to_string(),
            search: String::new(),
        }
    }

    /// Whether no filtering is in effect
    pub fn is_passthrough(&self) -> bool {
        self.search.is_empty()
            && (self.status.is_empty() || self.status.eq_ignore_ascii_case(STATUS_ALL))
    }

    pub fn matches(&self, node: &ResourceNode) -> bool {
        if !self.status.is_empty()
            && !self.status.eq_ignore_ascii_case(STATUS_ALL)
            && !node.status_str().eq_ignore_ascii_case(&self.status)
        {
            return false;
        }
        if !self.search.is_empty() {
            let name = node.name.to_lowercase();
            if !name.contains(&self.search.to_lowercase()) {
                return false;
            }
        }
        true
    }
}

/// Nodes passing the filter, in input order
pub fn filter_nodes(nodes: &[ResourceNode], filter: &NodeFilter) -> Vec<ResourceNode> {
    if filter.is_passthrough() {
        return nodes.to_vec();
    }
    nodes
        .iter()
        .filter(|node| filter.matches(node))
        .cloned()
        .collect()
}
