//! Shared snapshot state
//!
//! Holds the latest resource-tree snapshot together with the active node
//! filter, behind an async lock so the refresh task and the UI can share it.
//! Every read clones out, so callers never hold the lock across awaits, and
//! every publish replaces the snapshot wholesale.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{PodMetadata, ResourceNode, ResourceTreeResponse};
use crate::tree::{
    build_tree, filter_nodes, pods_for_root_name, resolve_pod_parents, DisplayTreeNode,
    InstanceNode, NodeFilter, StatusSummary,
};

#[derive(Default)]
struct StoreInner {
    response: ResourceTreeResponse,
    filter: NodeFilter,
}

/// Thread-safe holder of the latest snapshot
#[derive(Clone, Default)]
pub struct SnapshotStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot wholesale
    pub async fn publish(&self, response: ResourceTreeResponse) {
        let mut inner = self.inner.write().await;
        inner.response = response;
    }

    /// Drop the snapshot (switching the viewed application)
    pub async fn clear(&self) {
        let mut inner = self.inner.write().await;
        inner.response = ResourceTreeResponse::default();
    }

    pub async fn set_status_filter(&self, status: &str) {
        let mut inner = self.inner.write().await;
        inner.filter.status = status.to_string();
    }

    pub async fn set_search(&self, search: &str) {
        let mut inner = self.inner.write().await;
        inner.filter.search = search.to_string();
    }

    pub async fn filter(&self) -> NodeFilter {
        self.inner.read().await.filter.clone()
    }

    /// All nodes of the latest snapshot, unfiltered
    pub async fn nodes(&self) -> Vec<ResourceNode> {
        self.inner.read().await.response.nodes.clone()
    }

    /// Nodes passing the active filter
    pub async fn filtered_nodes(&self) -> Vec<ResourceNode> {
        let inner = self.inner.read().await;
        filter_nodes(&inner.response.nodes, &inner.filter)
    }

    /// Status counts over the unfiltered snapshot
    pub async fn summary(&self) -> StatusSummary {
        let inner = self.inner.read().await;
        StatusSummary::build(&inner.response.nodes)
    }

    /// Category/kind display tree over the filtered nodes
    pub async fn display_tree(&self) -> Vec<DisplayTreeNode> {
        let inner = self.inner.read().await;
        let nodes = filter_nodes(&inner.response.nodes, &inner.filter);
        build_tree(&nodes)
    }

    /// Resolved pod parents over the unfiltered snapshot
    pub async fn pod_parents(&self) -> Vec<(String, String)> {
        let inner = self.inner.read().await;
        resolve_pod_parents(&inner.response.nodes)
    }

    /// Pods beneath the top-level workload with the given name
    pub async fn pods_for_root(&self, root_name: &str) -> Vec<InstanceNode> {
        let inner = self.inner.read().await;
        pods_for_root_name(
            &inner.response.nodes,
            root_name,
            &inner.response.pod_metadata,
        )
    }

    pub async fn pod_metadata(&self) -> Vec<PodMetadata> {
        self.inner.read().await.response.pod_metadata.clone()
    }

    pub async fn all_pods(&self) -> Vec<PodMetadata> {
        self.pod_metadata().await
    }

    /// Pods belonging to the newest rollout of their workload
    pub async fn new_pods(&self) -> Vec<PodMetadata> {
        let inner = self.inner.read().await;
        inner
            .response
            .pod_metadata
            .iter()
            .filter(|meta| meta.is_new)
            .cloned()
            .collect()
    }

    /// Pods left over from superseded rollouts
    pub async fn old_pods(&self) -> Vec<PodMetadata> {
        let inner = self.inner.read().await;
        inner
            .response
            .pod_metadata
            .iter()
            .filter(|meta| !meta.is_new)
            .cloned()
            .collect()
    }

    pub async fn containers_for_pod(&self, uid: &str) -> Vec<String> {
        let inner = self.inner.read().await;
        inner
            .response
            .pod_metadata
            .iter()
            .find(|meta| meta.uid == uid)
            .map(|meta| meta.containers.clone())
            .unwrap_or_default()
    }

    /// Backend-computed application-level status, if any
    pub async fn app_status(&self) -> Option<String> {
        self.inner.read().await.response.status.clone()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.response.nodes.is_empty()
    }
}
