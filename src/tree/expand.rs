//! Expanded-node tracking for the tree view
//!
//! Holds which tree branches render open, keyed by lowercase identifier.
//! Expanding a node always marks its whole ancestor chain in the same step,
//! so a deep link into the tree opens every level above it. State lives for
//! the duration of the owning view and is replaced wholesale when the viewed
//! application changes.

use std::collections::HashSet;

/// Set of expanded tree nodes, keyed by lowercase identifier
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpandedNodes {
    expanded: HashSet<String>,
}

impl ExpandedNodes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a caller-provided set of expanded identifiers
    pub fn with_initial(identifiers: &[String]) -> Self {
        let mut state = Self::new();
        state.reset(identifiers);
        state
    }

    /// Mark a node and its full ancestor chain expanded
    ///
    /// Idempotent: expanding an already-expanded node changes nothing.
    pub fn expand(&mut self, identifier: &str, ancestors: &[String]) {
        self.expanded.insert(identifier.to_lowercase());
        for ancestor in ancestors {
            self.expanded.insert(ancestor.to_lowercase());
        }
    }

    /// Collapse exactly one node
    ///
    /// Descendants keep their entries; they simply stop being reachable until
    /// the node is expanded again.
    pub fn collapse(&mut self, identifier: &str) {
        self.expanded.remove(&identifier.to_lowercase());
    }

    /// Replace the expanded set wholesale
    pub fn reset(&mut self, identifiers: &[String]) {
        self.expanded = identifiers.iter().map(|id| id.to_lowercase()).collect();
    }

    pub fn is_expanded(&self, identifier: &str) -> bool {
        self.expanded.contains(&identifier.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}
