//! Live cluster snapshot source
//!
//! Assembles a `ResourceTreeResponse` directly from the Kubernetes API:
//! lists the workload, networking, and configuration kinds in one namespace,
//! maps ownerReferences onto parent refs, and derives a health status per
//! kind the way the backend's health checks would report it.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use k8s_openapi::api::apps::v1::{DaemonSet, Deployment, ReplicaSet, StatefulSet};
use k8s_openapi::api::batch::v1::{CronJob, Job};
use k8s_openapi::api::core::v1::{
    ConfigMap, Endpoints, PersistentVolumeClaim, Pod, Secret, Service, ServiceAccount,
};
use k8s_openapi::api::networking::v1::Ingress;
use kube::api::ListParams;
use kube::core::NamespaceResourceScope;
use kube::{Api, Client, ResourceExt};

use super::{SnapshotResult, SnapshotSource};
use crate::models::{HealthInfo, ParentRef, PodMetadata, ResourceNode, ResourceTreeResponse};
use crate::tree::status::reduce_all;

/// Revision annotation Deployments stamp onto their ReplicaSets
const REVISION_ANNOTATION: &str = "deployment.kubernetes.io/revision";

/// Snapshot source backed by a live cluster connection
pub struct ClusterSource {
    client: Client,
    namespace: String,
    selector: Option<String>,
}

impl ClusterSource {
    pub fn new(client: Client, namespace: String, selector: Option<String>) -> Self {
        Self {
            client,
            namespace,
            selector,
        }
    }

    fn list_params(&self) -> ListParams {
        match &self.selector {
            Some(selector) => ListParams::default().labels(selector),
            None => ListParams::default(),
        }
    }

    /// List one typed kind and convert every item to a resource node
    async fn list_kind<K, F>(
        &self,
        group: &str,
        version: &str,
        kind: &str,
        health: F,
    ) -> SnapshotResult<Vec<ResourceNode>>
    where
        K: kube::Resource<Scope = NamespaceResourceScope>
            + Clone
            + std::fmt::Debug
            + serde::de::DeserializeOwned,
        K::DynamicType: Default,
        F: Fn(&K) -> Option<String>,
    {
        let api: Api<K> = Api::namespaced(self.client.clone(), &self.namespace);
        let list = api.list(&self.list_params()).await?;
        tracing::debug!(
            "Listed {} {} objects in namespace {}",
            list.items.len(),
            kind,
            self.namespace
        );

        Ok(list
            .items
            .iter()
            .map(|obj| to_node(obj, group, version, kind, health(obj)))
            .collect())
    }
}

#[async_trait]
impl SnapshotSource for ClusterSource {
    async fn fetch(&self) -> SnapshotResult<ResourceTreeResponse> {
        let mut nodes = Vec::new();

        nodes.extend(
            self.list_kind::<Deployment, _>("apps", "v1", "Deployment", deployment_health)
                .await?,
        );
        let replica_sets: Api<ReplicaSet> = Api::namespaced(self.client.clone(), &self.namespace);
        let replica_sets = replica_sets.list(&self.list_params()).await?.items;
        nodes.extend(
            replica_sets
                .iter()
                .map(|rs| to_node(rs, "apps", "v1", "ReplicaSet", replica_set_health(rs))),
        );
        nodes.extend(
            self.list_kind::<StatefulSet, _>("apps", "v1", "StatefulSet", stateful_set_health)
                .await?,
        );
        nodes.extend(
            self.list_kind::<DaemonSet, _>("apps", "v1", "DaemonSet", daemon_set_health)
                .await?,
        );
        nodes.extend(
            self.list_kind::<Job, _>("batch", "v1", "Job", job_health)
                .await?,
        );
        nodes.extend(
            self.list_kind::<CronJob, _>("batch", "v1", "CronJob", |_| None)
                .await?,
        );

        let pods_api: Api<Pod> = Api::namespaced(self.client.clone(), &self.namespace);
        let pods = pods_api.list(&self.list_params()).await?.items;
        nodes.extend(pods.iter().map(|pod| to_node(pod, "", "v1", "Pod", pod_health(pod))));

        nodes.extend(
            self.list_kind::<Service, _>("", "v1", "Service", |_| None)
                .await?,
        );
        nodes.extend(
            self.list_kind::<Endpoints, _>("", "v1", "Endpoints", |_| None)
                .await?,
        );
        nodes.extend(
            self.list_kind::<Ingress, _>("networking.k8s.io", "v1", "Ingress", |_| None)
                .await?,
        );
        nodes.extend(
            self.list_kind::<ConfigMap, _>("", "v1", "ConfigMap", |_| None)
                .await?,
        );
        nodes.extend(
            self.list_kind::<Secret, _>("", "v1", "Secret", |_| None)
                .await?,
        );
        nodes.extend(
            self.list_kind::<PersistentVolumeClaim, _>("", "v1", "PersistentVolumeClaim", pvc_health)
                .await?,
        );
        nodes.extend(
            self.list_kind::<ServiceAccount, _>("", "v1", "ServiceAccount", |_| None)
                .await?,
        );

        let pod_metadata = pod_metadata_from(&pods, &replica_sets);
        let status = match reduce_all(nodes.iter().map(|node| node.status_str())) {
            s if s.is_empty() => None,
            s => Some(s),
        };

        tracing::debug!(
            "Assembled cluster snapshot: {} nodes, {} pods",
            nodes.len(),
            pod_metadata.len()
        );
        Ok(ResourceTreeResponse {
            nodes,
            pod_metadata,
            status,
        })
    }

    fn source_type(&self) -> &str {
        "cluster"
    }

    async fn health_check(&self) -> SnapshotResult<()> {
        let api: Api<Pod> = Api::namespaced(self.client.clone(), &self.namespace);
        api.list(&ListParams::default().limit(1)).await?;
        Ok(())
    }
}

/// Convert a typed object's metadata into a resource node
fn to_node<K>(obj: &K, group: &str, version: &str, kind: &str, status: Option<String>) -> ResourceNode
where
    K: kube::Resource,
    K::DynamicType: Default,
{
    let parent_refs = parent_refs_from(obj.owner_references());
    ResourceNode {
        group: group.to_string(),
        version: version.to_string(),
        kind: kind.to_string(),
        name: obj.name_any(),
        namespace: obj.namespace(),
        uid: obj.uid(),
        health: status.map(|status| HealthInfo {
            status: Some(status),
            message: None,
        }),
        parent_refs,
        created_at: obj.meta().creation_timestamp.as_ref().map(|time| time.0),
        networking_info: None,
    }
}

fn parent_refs_from(
    owners: &[k8s_openapi::apimachinery::pkg::apis::meta::v1::OwnerReference],
) -> Option<Vec<ParentRef>> {
    if owners.is_empty() {
        return None;
    }
    Some(
        owners
            .iter()
            .map(|owner| {
                // apiVersion is "group/version", or just "version" for core
                let (group, version) = match owner.api_version.split_once('/') {
                    Some((group, version)) => (group.to_string(), version.to_string()),
                    None => (String::new(), owner.api_version.clone()),
                };
                ParentRef {
                    group,
                    kind: owner.kind.clone(),
                    name: owner.name.clone(),
                    version: Some(version),
                    namespace: None,
                }
            })
            .collect(),
    )
}

fn deployment_health(deployment: &Deployment) -> Option<String> {
    let desired = deployment.spec.as_ref().and_then(|s| s.replicas).unwrap_or(1);
    if desired == 0 {
        return Some("Suspended".to_string());
    }
    let ready = deployment
        .status
        .as_ref()
        .and_then(|s| s.ready_replicas)
        .unwrap_or(0);
    let available = deployment
        .status
        .as_ref()
        .and_then(|s| s.available_replicas)
        .unwrap_or(0);
    if ready == desired && available == desired {
        Some("Healthy".to_string())
    } else {
        Some("Progressing".to_string())
    }
}

fn replica_set_health(rs: &ReplicaSet) -> Option<String> {
    let desired = rs.spec.as_ref().and_then(|s| s.replicas).unwrap_or(1);
    if desired == 0 {
        // Scaled-down ReplicaSets of previous rollouts carry no status
        return None;
    }
    let ready = rs.status.as_ref().and_then(|s| s.ready_replicas).unwrap_or(0);
    if ready == desired {
        Some("Healthy".to_string())
    } else {
        Some("Progressing".to_string())
    }
}

fn stateful_set_health(sts: &StatefulSet) -> Option<String> {
    let desired = sts.spec.as_ref().and_then(|s| s.replicas).unwrap_or(1);
    if desired == 0 {
        return Some("Suspended".to_string());
    }
    let ready = sts.status.as_ref().and_then(|s| s.ready_replicas).unwrap_or(0);
    if ready == desired {
        Some("Healthy".to_string())
    } else {
        Some("Progressing".to_string())
    }
}

fn daemon_set_health(ds: &DaemonSet) -> Option<String> {
    let desired = ds
        .status
        .as_ref()
        .map(|s| s.desired_number_scheduled)
        .unwrap_or(0);
    let ready = ds.status.as_ref().map(|s| s.number_ready).unwrap_or(0);
    if desired > 0 && ready == desired {
        Some("Healthy".to_string())
    } else {
        Some("Progressing".to_string())
    }
}

fn job_health(job: &Job) -> Option<String> {
    let succeeded = job.status.as_ref().and_then(|s| s.succeeded).unwrap_or(0);
    let failed = job.status.as_ref().and_then(|s| s.failed).unwrap_or(0);
    if failed > 0 {
        Some("Degraded".to_string())
    } else if succeeded > 0 {
        Some("Healthy".to_string())
    } else {
        Some("Progressing".to_string())
    }
}

fn pod_health(pod: &Pod) -> Option<String> {
    let status = pod.status.as_ref()?;
    let phase = status.phase.as_deref().unwrap_or("Unknown");
    let all_ready = status
        .container_statuses
        .as_ref()
        .map(|statuses| statuses.iter().all(|cs| cs.ready))
        .unwrap_or(false);

    let health = match phase {
        "Running" if all_ready => "Healthy",
        "Running" | "Pending" => "Progressing",
        "Succeeded" => "Healthy",
        "Failed" => "Degraded",
        _ => "Unknown",
    };
    Some(health.to_string())
}

fn pvc_health(pvc: &PersistentVolumeClaim) -> Option<String> {
    let phase = pvc.status.as_ref()?.phase.as_deref()?;
    let health = match phase {
        "Bound" => "Healthy",
        "Pending" => "Progressing",
        "Lost" => "Degraded",
        _ => "Unknown",
    };
    Some(health.to_string())
}

/// Build pod metadata, marking pods of the newest Deployment rollout
///
/// A pod is "new" unless it is owned by a ReplicaSet whose revision is older
/// than the highest revision among its Deployment's ReplicaSets. Pods owned
/// directly by other controllers are always current.
fn pod_metadata_from(pods: &[Pod], replica_sets: &[ReplicaSet]) -> Vec<PodMetadata> {
    let old_replica_sets = outdated_replica_sets(replica_sets);

    pods.iter()
        .map(|pod| {
            let owned_by_old = pod
                .owner_references()
                .iter()
                .any(|owner| owner.kind == "ReplicaSet" && old_replica_sets.contains(&owner.name));
            let spec = pod.spec.as_ref();
            let containers = spec
                .map(|s| s.containers.iter().map(|c| c.name.clone()).collect())
                .unwrap_or_default();
            let init_containers = spec.and_then(|s| s.init_containers.as_ref()).map(|list| {
                list.iter().map(|c| c.name.clone()).collect::<Vec<String>>()
            });
            PodMetadata {
                name: pod.name_any(),
                uid: pod.uid().unwrap_or_default(),
                containers,
                init_containers,
                ephemeral_containers: None,
                is_new: !owned_by_old,
            }
        })
        .collect()
}

/// Names of ReplicaSets superseded by a newer revision of their Deployment
fn outdated_replica_sets(replica_sets: &[ReplicaSet]) -> HashSet<String> {
    let mut revisions: HashMap<String, Vec<(String, i64)>> = HashMap::new();
    for rs in replica_sets {
        let Some(deployment) = rs
            .owner_references()
            .iter()
            .find(|owner| owner.kind == "Deployment")
        else {
            continue;
        };
        let revision = rs
            .annotations()
            .get(REVISION_ANNOTATION)
            .and_then(|value| value.parse::<i64>().ok())
            .unwrap_or(0);
        revisions
            .entry(deployment.name.clone())
            .or_default()
            .push((rs.name_any(), revision));
    }

    let mut outdated = HashSet::new();
    for entries in revisions.values() {
        let newest = entries.iter().map(|(_, rev)| *rev).max().unwrap_or(0);
        for (name, revision) in entries {
            if *revision < newest {
                outdated.insert(name.clone());
            }
        }
    }
    outdated
}
