//! Status count rollups
//!
//! Counts nodes per health status, overall and broken down by kind and by
//! aggregation category. The status filter bar and the one-shot tree command
//! footer both render from these counts.

use std::collections::BTreeMap;

use crate::models::{classify, ResourceNode};

/// Status key used for nodes without a reported health status
pub const STATUS_MISSING: &str = "(none)";

/// Node counts per status, overall and per kind/category
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusSummary {
    /// Lowercase status -> node count
    pub status_count: BTreeMap<String, usize>,
    /// Kind -> (lowercase status -> node count)
    pub kind_status_count: BTreeMap<String, BTreeMap<String, usize>>,
    /// Category display name -> (lowercase status -> node count)
    pub category_status_count: BTreeMap<String, BTreeMap<String, usize>>,
    pub total: usize,
}

impl StatusSummary {
    pub fn build(nodes: &[ResourceNode]) -> Self {
        let mut summary = Self::default();
        for node in nodes {
            let status = match node.status_str() {
                "" => STATUS_MISSING.to_string(),
                reported => reported.to_lowercase(),
            };
            let category = classify(&node.kind, false).as_str().to_string();

            *summary.status_count.entry(status.clone()).or_default() += 1;
            *summary
                .kind_status_count
                .entry(node.kind.clone())
                .or_default()
                .entry(status.clone())
                .or_default() += 1;
            *summary
                .category_status_count
                .entry(category)
                .or_default()
                .entry(status)
                .or_default() += 1;
            summary.total += 1;
        }
        summary
    }

    /// Count of nodes with the given status (case-insensitive)
    pub fn count_for(&self, status: &str) -> usize {
        self.status_count
            .get(&status.to_lowercase())
            .copied()
            .unwrap_or(0)
    }

    /// One-line `status:count` rendering in alphabetical status order
    pub fn one_line(&self) -> String {
        self.status_count
            .iter()
            .map(|(status, count)| format!("{status}:{count}"))
            .collect::<Vec<_>>()
            .join("  ")
    }
}
