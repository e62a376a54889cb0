//! Resource tree wire model
//!
//! Types for the resource-tree payload describing one deployed application:
//! a flat list of Kubernetes objects with health and controller ownership,
//! plus pod-level metadata. A snapshot is replaced wholesale on every fetch
//! and never patched in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One Kubernetes object instance observed in a cluster snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceNode {
    /// API group; empty for the core group
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub version: String,
    pub kind: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Health as reported by the backend's health checks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<HealthInfo>,
    /// Owning controller references; absent for root-level objects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_refs: Option<Vec<ParentRef>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub networking_info: Option<NetworkingInfo>,
}

impl ResourceNode {
    /// Full identifier: `{group}/{version}/{kind}/{name}`
    pub fn id(&self) -> String {
        format!("{}/{}/{}/{}", self.group, self.version, self.kind, self.name)
    }

    /// Ownership lookup key: `{group}/{kind}/{name}`, matching [`ParentRef::id`]
    pub fn owner_id(&self) -> String {
        format!("{}/{}/{}", self.group, self.kind, self.name)
    }

    /// Case-insensitive kind comparison
    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind.eq_ignore_ascii_case(kind)
    }

    /// Health status string, empty when health is missing or has no status
    pub fn status_str(&self) -> &str {
        self.health
            .as_ref()
            .and_then(|h| h.status.as_deref())
            .unwrap_or("")
    }

    /// Whether this node records at least one owning controller
    pub fn has_parent_refs(&self) -> bool {
        self.parent_refs.as_ref().is_some_and(|refs| !refs.is_empty())
    }
}

/// Reference to an owning controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentRef {
    #[serde(default)]
    pub group: String,
    pub kind: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl ParentRef {
    /// Ownership lookup key: `{group}/{kind}/{name}`
    pub fn id(&self) -> String {
        format!("{}/{}/{}", self.group, self.kind, self.name)
    }
}

/// Backend-reported health for one resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Networking details carried opaquely for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkingInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_labels: Option<serde_json::Value>,
}

/// Pod-level metadata reported alongside the node list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodMetadata {
    pub name: String,
    pub uid: String,
    #[serde(default)]
    pub containers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub init_containers: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ephemeral_containers: Option<Vec<String>>,
    /// Whether the pod belongs to the newest rollout of its workload
    #[serde(default)]
    pub is_new: bool,
}

/// Full resource-tree payload for one application/environment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceTreeResponse {
    #[serde(default)]
    pub nodes: Vec<ResourceNode>,
    #[serde(default)]
    pub pod_metadata: Vec<PodMetadata>,
    /// Application-level status computed by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_node_deserialize_camel_case() {
        let node: ResourceNode = serde_json::from_value(json!({
            "group": "apps",
            "version": "v1",
            "kind": "ReplicaSet",
            "name": "web-7d4b9c",
            "namespace": "demo",
            "uid": "abc-123",
            "health": { "status": "Healthy" },
            "parentRefs": [
                { "group": "apps", "kind": "Deployment", "name": "web" }
            ]
        }))
        .unwrap();

        assert_eq!(node.id(), "apps/v1/ReplicaSet/web-7d4b9c");
        assert_eq!(node.owner_id(), "apps/ReplicaSet/web-7d4b9c");
        assert_eq!(node.status_str(), "Healthy");
        assert!(node.has_parent_refs());
        assert_eq!(node.parent_refs.unwrap()[0].id(), "apps/Deployment/web");
    }

    #[test]
    fn test_core_group_node_has_empty_leading_segment() {
        let node: ResourceNode = serde_json::from_value(json!({
            "version": "v1",
            "kind": "Pod",
            "name": "web-7d4b9c-x2r"
        }))
        .unwrap();

        assert_eq!(node.id(), "/v1/Pod/web-7d4b9c-x2r");
        assert_eq!(node.status_str(), "");
        assert!(!node.has_parent_refs());
        assert!(node.is_kind("pod"));
    }

    #[test]
    fn test_response_defaults() {
        let response: ResourceTreeResponse = serde_json::from_value(json!({
            "nodes": [
                { "version": "v1", "kind": "Service", "name": "web" }
            ]
        }))
        .unwrap();

        assert_eq!(response.nodes.len(), 1);
        assert!(response.pod_metadata.is_empty());
        assert!(response.status.is_none());
    }

    #[test]
    fn test_pod_metadata_is_new_defaults_false() {
        let meta: PodMetadata = serde_json::from_value(json!({
            "name": "web-7d4b9c-x2r",
            "uid": "abc-123",
            "containers": ["app", "sidecar"]
        }))
        .unwrap();

        assert!(!meta.is_new);
        assert_eq!(meta.containers, vec!["app", "sidecar"]);
    }
}
