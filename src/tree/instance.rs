//! Instance-level drill-down trees
//!
//! Builds the concrete object forest under chosen root workloads by chasing
//! parent references downward: Deployment -> ReplicaSet -> Pod, with each
//! pod's children replaced by its container entries from the pod metadata.
//! Unlike the category tree, levels here are real objects, one node per
//! parent that claims them.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::models::{PodMetadata, ResourceKind, ResourceNode};

/// One object in a drill-down tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceNode {
    pub kind: String,
    pub name: String,
    pub status: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub child_nodes: Vec<InstanceNode>,
}

/// Index of node positions by the owner id their parent refs use
fn children_by_parent(nodes: &[ResourceNode]) -> HashMap<String, Vec<usize>> {
    let mut index: HashMap<String, Vec<usize>> = HashMap::new();
    for (at, node) in nodes.iter().enumerate() {
        for parent in node.parent_refs.as_deref().unwrap_or_default() {
            index.entry(parent.id()).or_default().push(at);
        }
    }
    index
}

fn containers_for(node: &ResourceNode, pod_metadata: &[PodMetadata]) -> Vec<InstanceNode> {
    let Some(uid) = node.uid.as_deref() else {
        return Vec::new();
    };
    pod_metadata
        .iter()
        .find(|meta| meta.uid == uid)
        .map(|meta| {
            meta.containers
                .iter()
                .map(|container| InstanceNode {
                    kind: ResourceKind::Containers.as_str().to_string(),
                    name: container.clone(),
                    status: String::new(),
                    child_nodes: Vec::new(),
                })
                .collect()
        })
        .unwrap_or_default()
}

fn build_subtree(
    at: usize,
    nodes: &[ResourceNode],
    index: &HashMap<String, Vec<usize>>,
    pod_metadata: &[PodMetadata],
    path: &mut HashSet<String>,
) -> InstanceNode {
    let node = &nodes[at];
    let mut instance = InstanceNode {
        kind: node.kind.clone(),
        name: node.name.clone(),
        status: node.status_str().to_string(),
        child_nodes: Vec::new(),
    };

    // Pods bottom out into their container list; owned objects under a pod
    // are not shown in this view.
    if node.is_kind("Pod") {
        instance.child_nodes = containers_for(node, pod_metadata);
        return instance;
    }

    let owner_id = node.owner_id();
    if !path.insert(owner_id.clone()) {
        // Already on the current path: a reference cycle, stop descending.
        return instance;
    }
    if let Some(children) = index.get(&owner_id) {
        instance.child_nodes = children
            .iter()
            .map(|&child| build_subtree(child, nodes, index, pod_metadata, path))
            .collect();
        instance.child_nodes.sort_by(|a, b| a.name.cmp(&b.name));
    }
    path.remove(&owner_id);
    instance
}

fn build_forest(
    nodes: &[ResourceNode],
    roots: Vec<usize>,
    pod_metadata: &[PodMetadata],
) -> Vec<InstanceNode> {
    let index = children_by_parent(nodes);
    let mut path = HashSet::new();
    roots
        .into_iter()
        .map(|at| build_subtree(at, nodes, &index, pod_metadata, &mut path))
        .collect()
}

/// Build drill-down trees rooted at every node of the given kind
pub fn instance_trees_for_kind(
    nodes: &[ResourceNode],
    kind: &str,
    pod_metadata: &[PodMetadata],
) -> Vec<InstanceNode> {
    let roots = nodes
        .iter()
        .enumerate()
        .filter(|(_, node)| node.is_kind(kind))
        .map(|(at, _)| at)
        .collect();
    build_forest(nodes, roots, pod_metadata)
}

/// Build drill-down trees rooted at top-level nodes with the given name
///
/// Roots match by name case-insensitively and must not themselves be owned.
pub fn instance_trees_for_root_name(
    nodes: &[ResourceNode],
    root_name: &str,
    pod_metadata: &[PodMetadata],
) -> Vec<InstanceNode> {
    let roots = nodes
        .iter()
        .enumerate()
        .filter(|(_, node)| {
            node.name.eq_ignore_ascii_case(root_name) && !node.has_parent_refs()
        })
        .map(|(at, _)| at)
        .collect();
    build_forest(nodes, roots, pod_metadata)
}

/// Collect every pod beneath the top-level nodes with the given name
pub fn pods_for_root_name(
    nodes: &[ResourceNode],
    root_name: &str,
    pod_metadata: &[PodMetadata],
) -> Vec<InstanceNode> {
    let mut level = instance_trees_for_root_name(nodes, root_name, pod_metadata);
    let mut pods = Vec::new();
    while !level.is_empty() {
        let mut next = Vec::new();
        for instance in level {
            if instance.kind.eq_ignore_ascii_case("Pod") {
                pods.push(instance);
            } else {
                next.extend(instance.child_nodes);
            }
        }
        level = next;
    }
    pods
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HealthInfo, ParentRef};

    fn node(kind: &str, name: &str, uid: Option<&str>, parents: &[(&str, &str)]) -> ResourceNode {
        ResourceNode {
            group: if kind == "Pod" { String::new() } else { "apps".to_string() },
            version: "v1".to_string(),
            kind: kind.to_string(),
            name: name.to_string(),
            namespace: Some("demo".to_string()),
            uid: uid.map(str::to_string),
            health: Some(HealthInfo {
                status: Some("healthy".to_string()),
                message: None,
            }),
            parent_refs: if parents.is_empty() {
                None
            } else {
                Some(
                    parents
                        .iter()
                        .map(|(kind, name)| ParentRef {
                            group: if *kind == "Pod" { String::new() } else { "apps".to_string() },
                            kind: kind.to_string(),
                            name: name.to_string(),
                            version: None,
                            namespace: None,
                        })
                        .collect(),
                )
            },
            created_at: None,
            networking_info: None,
        }
    }

    fn pod_meta(name: &str, uid: &str, containers: &[&str]) -> PodMetadata {
        PodMetadata {
            name: name.to_string(),
            uid: uid.to_string(),
            containers: containers.iter().map(|c| c.to_string()).collect(),
            init_containers: None,
            ephemeral_containers: None,
            is_new: true,
        }
    }

    #[test]
    fn test_forest_follows_parent_refs_downward() {
        let nodes = vec![
            node("Deployment", "web", None, &[]),
            node("ReplicaSet", "web-abc", None, &[("Deployment", "web")]),
            node("Pod", "web-abc-2", Some("u2"), &[("ReplicaSet", "web-abc")]),
            node("Pod", "web-abc-1", Some("u1"), &[("ReplicaSet", "web-abc")]),
        ];

        let forest = instance_trees_for_kind(&nodes, "deployment", &[]);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].name, "web");
        assert_eq!(forest[0].child_nodes.len(), 1);

        let replica_set = &forest[0].child_nodes[0];
        assert_eq!(replica_set.name, "web-abc");
        // Children sort by name within a level
        let pod_names: Vec<&str> = replica_set
            .child_nodes
            .iter()
            .map(|n| n.name.as_str())
            .collect();
        assert_eq!(pod_names, vec!["web-abc-1", "web-abc-2"]);
    }

    #[test]
    fn test_pods_expand_into_containers_in_metadata_order() {
        let nodes = vec![
            node("Deployment", "web", None, &[]),
            node("Pod", "web-1", Some("u1"), &[("Deployment", "web")]),
        ];
        let meta = vec![pod_meta("web-1", "u1", &["sidecar", "app"])];

        let forest = instance_trees_for_kind(&nodes, "Deployment", &meta);
        let pod = &forest[0].child_nodes[0];
        assert_eq!(pod.kind, "Pod");

        let containers: Vec<(&str, &str)> = pod
            .child_nodes
            .iter()
            .map(|n| (n.kind.as_str(), n.name.as_str()))
            .collect();
        assert_eq!(containers, vec![("Containers", "sidecar"), ("Containers", "app")]);
    }

    #[test]
    fn test_node_owned_by_two_parents_appears_under_both() {
        let nodes = vec![
            node("Deployment", "a", None, &[]),
            node("Deployment", "b", None, &[]),
            node("ReplicaSet", "shared", None, &[("Deployment", "a"), ("Deployment", "b")]),
        ];

        let forest = instance_trees_for_kind(&nodes, "Deployment", &[]);
        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].child_nodes[0].name, "shared");
        assert_eq!(forest[1].child_nodes[0].name, "shared");
    }

    #[test]
    fn test_reference_cycle_stops_descending() {
        let nodes = vec![
            node("ReplicaSet", "a", None, &[("ReplicaSet", "b")]),
            node("ReplicaSet", "b", None, &[("ReplicaSet", "a")]),
        ];

        let forest = instance_trees_for_kind(&nodes, "ReplicaSet", &[]);
        assert_eq!(forest.len(), 2);
        // a -> b -> a stops at the repeated node
        assert_eq!(forest[0].child_nodes.len(), 1);
        assert!(forest[0].child_nodes[0].child_nodes[0].child_nodes.is_empty());
    }

    #[test]
    fn test_pods_for_root_name_collects_nested_pods() {
        let nodes = vec![
            node("Deployment", "web", None, &[]),
            node("ReplicaSet", "web-abc", None, &[("Deployment", "web")]),
            node("Pod", "web-abc-1", Some("u1"), &[("ReplicaSet", "web-abc")]),
            node("Pod", "web-abc-2", Some("u2"), &[("ReplicaSet", "web-abc")]),
            node("Deployment", "other", None, &[]),
            node("Pod", "other-1", Some("u3"), &[("Deployment", "other")]),
        ];

        let pods = pods_for_root_name(&nodes, "WEB", &[]);
        let names: Vec<&str> = pods.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["web-abc-1", "web-abc-2"]);
    }

    #[test]
    fn test_owned_node_never_matches_as_root() {
        let nodes = vec![
            node("Deployment", "web", None, &[]),
            node("ReplicaSet", "web", None, &[("Deployment", "web")]),
        ];

        let forest = instance_trees_for_root_name(&nodes, "web", &[]);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].kind, "Deployment");
    }
}
