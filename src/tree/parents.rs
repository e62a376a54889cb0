//! Pod ownership resolution
//!
//! Walks pod parent-reference chains upward (Pod -> ReplicaSet -> Deployment,
//! or directly to a StatefulSet/DaemonSet) to find the top-level controllers
//! that own pods. The tree view uses the result to roll pods up under their
//! controller instead of listing every pod at the top level.

use std::collections::{HashMap, HashSet};

use crate::models::ResourceNode;
use crate::tree::status::reduce_status;

/// Resolve the top-level owning controller for every pod in the snapshot
///
/// Returns one `(identifier, status)` pair per distinct controller that owns
/// at least one pod, sorted ascending by identifier. The identifier is the
/// full `{group}/{version}/{kind}/{name}` path of the controller; the status
/// is the controller's own reported health, reduced across duplicate
/// references.
///
/// Chains that leave the snapshot (a parent ref naming an object that is not
/// in the node list) are dropped without error, as are pods with no parent
/// refs at all. Reference cycles terminate the walk rather than looping.
pub fn resolve_pod_parents(nodes: &[ResourceNode]) -> Vec<(String, String)> {
    let nodes_by_owner_id: HashMap<String, &ResourceNode> =
        nodes.iter().map(|node| (node.owner_id(), node)).collect();

    // Seed the walk with every controller a pod references, in input order.
    let mut frontier: Vec<String> = Vec::new();
    let mut visited: HashSet<String> = HashSet::new();
    for pod in nodes.iter().filter(|node| node.is_kind("Pod")) {
        for parent in pod.parent_refs.as_deref().unwrap_or_default() {
            let id = parent.id();
            if visited.insert(id.clone()) {
                frontier.push(id);
            }
        }
    }

    // Replace each frontier entry with its own parents until only nodes
    // without parent refs remain; those are the top-level controllers.
    let mut root_status: HashMap<String, String> = HashMap::new();
    let mut roots: Vec<String> = Vec::new();
    while !frontier.is_empty() {
        let mut next: Vec<String> = Vec::new();
        for owner_id in frontier {
            let Some(node) = nodes_by_owner_id.get(owner_id.as_str()) else {
                // Referenced object not in the snapshot; drop the chain.
                continue;
            };
            if node.has_parent_refs() {
                for parent in node.parent_refs.as_deref().unwrap_or_default() {
                    let id = parent.id();
                    if visited.insert(id.clone()) {
                        next.push(id);
                    }
                }
            } else {
                let id = node.id();
                match root_status.get_mut(&id) {
                    Some(existing) => {
                        *existing = reduce_status(existing, node.status_str());
                    }
                    None => {
                        root_status.insert(id.clone(), node.status_str().to_string());
                        roots.push(id);
                    }
                }
            }
        }
        frontier = next;
    }

    let mut parents: Vec<(String, String)> = roots
        .into_iter()
        .map(|id| {
            let status = root_status.remove(&id).unwrap_or_default();
            (id, status)
        })
        .collect();
    parents.sort_by(|a, b| a.0.cmp(&b.0));
    parents
}
