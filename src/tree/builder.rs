//! Display tree construction
//!
//! Builds the nested category -> kind -> instance structure the tree view
//! renders, from one flat snapshot of resource nodes. Grouping happens in a
//! single linear scan with insertion-ordered buckets, so the output depends
//! only on the input list and its order.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{classify, AggregationCategory, ResourceNode};
use crate::tree::parents::resolve_pod_parents;
use crate::tree::status::reduce_status;

/// One node of the rendered tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayTreeNode {
    pub name: String,
    pub status: String,
    pub is_selected: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub child_nodes: Vec<DisplayTreeNode>,
}

impl DisplayTreeNode {
    fn new(name: String, status: String) -> Self {
        Self {
            name,
            status,
            is_selected: false,
            child_nodes: Vec::new(),
        }
    }
}

/// Kind-level nodes accumulated for one category, in first-seen order
#[derive(Default)]
struct CategoryBucket {
    kinds: Vec<DisplayTreeNode>,
    index: HashMap<String, usize>,
}

impl CategoryBucket {
    fn observe(&mut self, kind: &str, status: &str) {
        match self.index.get(kind) {
            Some(&at) => {
                let entry = &mut self.kinds[at];
                entry.status = reduce_status(&entry.status, status);
            }
            None => {
                self.index.insert(kind.to_string(), self.kinds.len());
                self.kinds
                    .push(DisplayTreeNode::new(kind.to_string(), status.to_string()));
            }
        }
    }
}

/// Last path segment of a controller identifier, used as its display name
fn short_name(identifier: &str) -> &str {
    identifier.rsplit('/').next().unwrap_or(identifier)
}

/// Build the display tree for one snapshot
///
/// Categories appear in their declared order and only when at least one kind
/// mapped to them. Each category node carries one child per kind with the
/// kind's reduced status; resolved pod parents hang beneath the Pod kind as
/// grandchildren. Every sibling level is sorted ascending by name (ordinal,
/// ties keep input order).
pub fn build_tree(nodes: &[ResourceNode]) -> Vec<DisplayTreeNode> {
    let pod_parents = resolve_pod_parents(nodes);

    let mut buckets: HashMap<AggregationCategory, CategoryBucket> = HashMap::new();
    for node in nodes {
        let category = classify(&node.kind, false);
        buckets
            .entry(category)
            .or_default()
            .observe(&node.kind, node.status_str());
    }

    let mut tree = Vec::new();
    for category in AggregationCategory::all() {
        let Some(mut bucket) = buckets.remove(category) else {
            continue;
        };

        for kind_node in &mut bucket.kinds {
            if kind_node.name.eq_ignore_ascii_case("Pod") && !pod_parents.is_empty() {
                kind_node.child_nodes = pod_parents
                    .iter()
                    .map(|(identifier, status)| {
                        DisplayTreeNode::new(short_name(identifier).to_string(), status.clone())
                    })
                    .collect();
                kind_node
                    .child_nodes
                    .sort_by(|a, b| a.name.cmp(&b.name));
            }
        }

        bucket.kinds.sort_by(|a, b| a.name.cmp(&b.name));

        let mut category_node = DisplayTreeNode::new(category.as_str().to_string(), String::new());
        category_node.child_nodes = bucket.kinds;
        tree.push(category_node);
    }
    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HealthInfo, ParentRef};

    fn node(group: &str, version: &str, kind: &str, name: &str, status: &str) -> ResourceNode {
        ResourceNode {
            group: group.to_string(),
            version: version.to_string(),
            kind: kind.to_string(),
            name: name.to_string(),
            namespace: Some("demo".to_string()),
            uid: None,
            health: if status.is_empty() {
                None
            } else {
                Some(HealthInfo {
                    status: Some(status.to_string()),
                    message: None,
                })
            },
            parent_refs: None,
            created_at: None,
            networking_info: None,
        }
    }

    fn owned(mut n: ResourceNode, group: &str, kind: &str, name: &str) -> ResourceNode {
        n.parent_refs = Some(vec![ParentRef {
            group: group.to_string(),
            kind: kind.to_string(),
            name: name.to_string(),
            version: None,
            namespace: None,
        }]);
        n
    }

    fn names(level: &[DisplayTreeNode]) -> Vec<&str> {
        level.iter().map(|n| n.name.as_str()).collect()
    }

    #[test]
    fn test_categories_emitted_in_declared_order() {
        let nodes = vec![
            node("", "v1", "Service", "web", "healthy"),
            node("apps", "v1", "Deployment", "web", "healthy"),
            node("", "v1", "ConfigMap", "settings", ""),
            node("", "v1", "ServiceAccount", "runner", ""),
        ];

        let tree = build_tree(&nodes);
        assert_eq!(
            names(&tree),
            vec!["Workloads", "Networking", "Config & Storage", "RBAC"]
        );
    }

    #[test]
    fn test_kind_children_sorted_and_status_reduced() {
        let nodes = vec![
            node("apps", "v1", "StatefulSet", "db", "healthy"),
            node("apps", "v1", "Deployment", "web", "healthy"),
            node("apps", "v1", "Deployment", "api", "degraded"),
        ];

        let tree = build_tree(&nodes);
        assert_eq!(tree.len(), 1);
        assert_eq!(names(&tree[0].child_nodes), vec!["Deployment", "StatefulSet"]);
        assert_eq!(tree[0].child_nodes[0].status, "degraded");
        assert_eq!(tree[0].child_nodes[1].status, "healthy");
    }

    #[test]
    fn test_pod_parents_attached_as_grandchildren() {
        let nodes = vec![
            node("apps", "v1", "Deployment", "web", "healthy"),
            owned(node("apps", "v1", "ReplicaSet", "web-abc", ""), "apps", "Deployment", "web"),
            owned(node("", "v1", "Pod", "web-abc-1", "healthy"), "apps", "ReplicaSet", "web-abc"),
            node("apps", "v1", "StatefulSet", "db", "progressing"),
            owned(node("", "v1", "Pod", "db-0", "healthy"), "apps", "StatefulSet", "db"),
        ];

        let tree = build_tree(&nodes);
        let workloads = &tree[0];
        assert_eq!(workloads.name, "Workloads");

        let pod_kind = workloads
            .child_nodes
            .iter()
            .find(|n| n.name == "Pod")
            .unwrap();
        assert_eq!(names(&pod_kind.child_nodes), vec!["db", "web"]);
        assert_eq!(pod_kind.child_nodes[0].status, "progressing");
        assert_eq!(pod_kind.child_nodes[1].status, "healthy");
    }

    #[test]
    fn test_unknown_kind_lands_in_custom_resource() {
        let nodes = vec![
            node("argoproj.io", "v1alpha1", "Rollout", "web", "healthy"),
            node("apps", "v1", "Deployment", "api", ""),
        ];

        let tree = build_tree(&nodes);
        assert_eq!(names(&tree), vec!["Workloads", "Custom Resource"]);
        assert_eq!(names(&tree[1].child_nodes), vec!["Rollout"]);
    }

    #[test]
    fn test_empty_input_builds_empty_tree() {
        assert!(build_tree(&[]).is_empty());
    }

    #[test]
    fn test_no_category_without_children() {
        let nodes = vec![node("", "v1", "Secret", "creds", "")];
        let tree = build_tree(&nodes);
        for category_node in &tree {
            assert!(!category_node.child_nodes.is_empty());
        }
        assert_eq!(names(&tree), vec!["Config & Storage"]);
    }

    #[test]
    fn test_build_is_deterministic() {
        let nodes = vec![
            node("apps", "v1", "Deployment", "web", "healthy"),
            owned(node("apps", "v1", "ReplicaSet", "web-abc", ""), "apps", "Deployment", "web"),
            owned(node("", "v1", "Pod", "web-abc-1", ""), "apps", "ReplicaSet", "web-abc"),
            node("", "v1", "Service", "web", "healthy"),
        ];

        let first = build_tree(&nodes);
        let second = build_tree(&nodes);
        assert_eq!(first, second);
    }

    #[test]
    fn test_category_nodes_carry_no_status() {
        let nodes = vec![node("apps", "v1", "Deployment", "web", "degraded")];
        let tree = build_tree(&nodes);
        assert_eq!(tree[0].status, "");
        assert!(!tree[0].is_selected);
    }

    #[test]
    fn test_short_name_takes_last_segment() {
        assert_eq!(short_name("apps/v1/Deployment/web"), "web");
        assert_eq!(short_name("web"), "web");
    }
}
