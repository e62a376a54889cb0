//! Kubernetes resource kind definitions
//!
//! This module provides a centralized enum for the resource kinds the tree
//! view knows how to group. This eliminates hardcoded strings throughout the
//! codebase and provides type safety for kind references.

use std::fmt;
use std::str::FromStr;

use crate::models::category::AggregationCategory;

/// Enumeration of the known Kubernetes resource kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    // Workload resources
    Pod,
    Deployment,
    ReplicaSet,
    StatefulSet,
    DaemonSet,
    Job,
    CronJob,
    ReplicationController,
    // Networking resources
    Service,
    Ingress,
    Endpoints,
    EndpointSlice,
    NetworkPolicy,
    // Config and storage resources
    ConfigMap,
    Secret,
    PersistentVolume,
    PersistentVolumeClaim,
    StorageClass,
    VolumeSnapshot,
    VolumeSnapshotContent,
    VolumeSnapshotClass,
    PodDisruptionBudget,
    // Access control resources
    ServiceAccount,
    ClusterRoleBinding,
    RoleBinding,
    ClusterRole,
    Role,
    PodSecurityPolicy,
    // Admission control resources
    MutatingWebhookConfiguration,
    ValidatingWebhookConfiguration,
    // Monitoring CRDs
    Alertmanager,
    Prometheus,
    ServiceMonitor,
    // Cluster-scoped resources
    Event,
    Namespace,
    // Vocabulary members without a dedicated bucket
    Rollout,
    Node,
    Overview,
    // Synthetic kind for container entries nested under pods
    Containers,
}

impl ResourceKind {
    /// Get the display name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Pod => "Pod",
            ResourceKind::Deployment => "Deployment",
            ResourceKind::ReplicaSet => "ReplicaSet",
            ResourceKind::StatefulSet => "StatefulSet",
            ResourceKind::DaemonSet => "DaemonSet",
            ResourceKind::Job => "Job",
            ResourceKind::CronJob => "CronJob",
            ResourceKind::ReplicationController => "ReplicationController",
            ResourceKind::Service => "Service",
            ResourceKind::Ingress => "Ingress",
            ResourceKind::Endpoints => "Endpoints",
            ResourceKind::EndpointSlice => "EndpointSlice",
            ResourceKind::NetworkPolicy => "NetworkPolicy",
            ResourceKind::ConfigMap => "ConfigMap",
            ResourceKind::Secret => "Secret",
            ResourceKind::PersistentVolume => "PersistentVolume",
            ResourceKind::PersistentVolumeClaim => "PersistentVolumeClaim",
            ResourceKind::StorageClass => "StorageClass",
            ResourceKind::VolumeSnapshot => "VolumeSnapshot",
            ResourceKind::VolumeSnapshotContent => "VolumeSnapshotContent",
            ResourceKind::VolumeSnapshotClass => "VolumeSnapshotClass",
            ResourceKind::PodDisruptionBudget => "PodDisruptionBudget",
            ResourceKind::ServiceAccount => "ServiceAccount",
            ResourceKind::ClusterRoleBinding => "ClusterRoleBinding",
            ResourceKind::RoleBinding => "RoleBinding",
            ResourceKind::ClusterRole => "ClusterRole",
            ResourceKind::Role => "Role",
            ResourceKind::PodSecurityPolicy => "PodSecurityPolicy",
            ResourceKind::MutatingWebhookConfiguration => "MutatingWebhookConfiguration",
            ResourceKind::ValidatingWebhookConfiguration => "ValidatingWebhookConfiguration",
            ResourceKind::Alertmanager => "Alertmanager",
            ResourceKind::Prometheus => "Prometheus",
            ResourceKind::ServiceMonitor => "ServiceMonitor",
            ResourceKind::Event => "Event",
            ResourceKind::Namespace => "Namespace",
            ResourceKind::Rollout => "Rollout",
            ResourceKind::Node => "Node",
            ResourceKind::Overview => "Overview",
            ResourceKind::Containers => "Containers",
        }
    }

    /// Try to parse a string into a ResourceKind, returning None if invalid
    /// Use this when you want Option<Self> instead of Result<Self, String>
    pub fn parse_optional(s: &str) -> Option<Self> {
        s.parse().ok()
    }

    /// Get all known resource kinds
    ///
    /// Returns an array of all ResourceKind variants.
    /// This is useful for iterating over all kinds dynamically.
    pub fn all() -> &'static [Self] {
        &[
            ResourceKind::Pod,
            ResourceKind::Deployment,
            ResourceKind::ReplicaSet,
            ResourceKind::StatefulSet,
            ResourceKind::DaemonSet,
            ResourceKind::Job,
            ResourceKind::CronJob,
            ResourceKind::ReplicationController,
            ResourceKind::Service,
            ResourceKind::Ingress,
            ResourceKind::Endpoints,
            ResourceKind::EndpointSlice,
            ResourceKind::NetworkPolicy,
            ResourceKind::ConfigMap,
            ResourceKind::Secret,
            ResourceKind::PersistentVolume,
            ResourceKind::PersistentVolumeClaim,
            ResourceKind::StorageClass,
            ResourceKind::VolumeSnapshot,
            ResourceKind::VolumeSnapshotContent,
            ResourceKind::VolumeSnapshotClass,
            ResourceKind::PodDisruptionBudget,
            ResourceKind::ServiceAccount,
            ResourceKind::ClusterRoleBinding,
            ResourceKind::RoleBinding,
            ResourceKind::ClusterRole,
            ResourceKind::Role,
            ResourceKind::PodSecurityPolicy,
            ResourceKind::MutatingWebhookConfiguration,
            ResourceKind::ValidatingWebhookConfiguration,
            ResourceKind::Alertmanager,
            ResourceKind::Prometheus,
            ResourceKind::ServiceMonitor,
            ResourceKind::Event,
            ResourceKind::Namespace,
            ResourceKind::Rollout,
            ResourceKind::Node,
            ResourceKind::Overview,
            ResourceKind::Containers,
        ]
    }

    /// Try to parse a string (case-insensitive, kubectl-style aliases) into a ResourceKind
    pub fn from_str_case_insensitive(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pod" | "pods" | "po" => Some(ResourceKind::Pod),
            "deployment" | "deployments" | "deploy" => Some(ResourceKind::Deployment),
            "replicaset" | "replicasets" | "rs" => Some(ResourceKind::ReplicaSet),
            "statefulset" | "statefulsets" | "sts" => Some(ResourceKind::StatefulSet),
            "daemonset" | "daemonsets" | "ds" => Some(ResourceKind::DaemonSet),
            "job" | "jobs" => Some(ResourceKind::Job),
            "cronjob" | "cronjobs" | "cj" => Some(ResourceKind::CronJob),
            "replicationcontroller" | "replicationcontrollers" | "rc" => {
                Some(ResourceKind::ReplicationController)
            }
            "service" | "services" | "svc" => Some(ResourceKind::Service),
            "ingress" | "ingresses" | "ing" => Some(ResourceKind::Ingress),
            "endpoints" | "ep" => Some(ResourceKind::Endpoints),
            "endpointslice" | "endpointslices" => Some(ResourceKind::EndpointSlice),
            "networkpolicy" | "networkpolicies" | "netpol" => Some(ResourceKind::NetworkPolicy),
            "configmap" | "configmaps" | "cm" => Some(ResourceKind::ConfigMap),
            "secret" | "secrets" => Some(ResourceKind::Secret),
            "persistentvolume" | "persistentvolumes" | "pv" => Some(ResourceKind::PersistentVolume),
            "persistentvolumeclaim" | "persistentvolumeclaims" | "pvc" => {
                Some(ResourceKind::PersistentVolumeClaim)
            }
            "storageclass" | "storageclasses" | "sc" => Some(ResourceKind::StorageClass),
            "volumesnapshot" | "volumesnapshots" => Some(ResourceKind::VolumeSnapshot),
            "volumesnapshotcontent" | "volumesnapshotcontents" => {
                Some(ResourceKind::VolumeSnapshotContent)
            }
            "volumesnapshotclass" | "volumesnapshotclasses" => {
                Some(ResourceKind::VolumeSnapshotClass)
            }
            "poddisruptionbudget" | "poddisruptionbudgets" | "pdb" => {
                Some(ResourceKind::PodDisruptionBudget)
            }
            "serviceaccount" | "serviceaccounts" | "sa" => Some(ResourceKind::ServiceAccount),
            "clusterrolebinding" | "clusterrolebindings" => Some(ResourceKind::ClusterRoleBinding),
            "rolebinding" | "rolebindings" => Some(ResourceKind::RoleBinding),
            "clusterrole" | "clusterroles" => Some(ResourceKind::ClusterRole),
            "role" | "roles" => Some(ResourceKind::Role),
            "podsecuritypolicy" | "podsecuritypolicies" | "psp" => {
                Some(ResourceKind::PodSecurityPolicy)
            }
            "mutatingwebhookconfiguration" | "mutatingwebhookconfigurations" => {
                Some(ResourceKind::MutatingWebhookConfiguration)
            }
            "validatingwebhookconfiguration" | "validatingwebhookconfigurations" => {
                Some(ResourceKind::ValidatingWebhookConfiguration)
            }
            "alertmanager" | "alertmanagers" => Some(ResourceKind::Alertmanager),
            "prometheus" | "prometheuses" => Some(ResourceKind::Prometheus),
            "servicemonitor" | "servicemonitors" => Some(ResourceKind::ServiceMonitor),
            "event" | "events" | "ev" => Some(ResourceKind::Event),
            "namespace" | "namespaces" | "ns" => Some(ResourceKind::Namespace),
            "rollout" | "rollouts" => Some(ResourceKind::Rollout),
            "node" | "nodes" | "no" => Some(ResourceKind::Node),
            "overview" => Some(ResourceKind::Overview),
            "containers" => Some(ResourceKind::Containers),
            _ => None,
        }
    }

    /// The aggregation bucket this kind belongs to, when it has a dedicated one
    ///
    /// Kinds without a dedicated bucket (including the synthetic Containers
    /// entry) return None and take the classifier's fallback category.
    pub fn category(&self) -> Option<AggregationCategory> {
        match self {
            ResourceKind::Pod
            | ResourceKind::Deployment
            | ResourceKind::ReplicaSet
            | ResourceKind::StatefulSet
            | ResourceKind::DaemonSet
            | ResourceKind::Job
            | ResourceKind::CronJob
            | ResourceKind::ReplicationController => Some(AggregationCategory::Workloads),
            ResourceKind::Service
            | ResourceKind::Ingress
            | ResourceKind::Endpoints
            | ResourceKind::EndpointSlice
            | ResourceKind::NetworkPolicy => Some(AggregationCategory::Networking),
            ResourceKind::ConfigMap
            | ResourceKind::Secret
            | ResourceKind::PersistentVolume
            | ResourceKind::PersistentVolumeClaim
            | ResourceKind::StorageClass
            | ResourceKind::VolumeSnapshot
            | ResourceKind::VolumeSnapshotContent
            | ResourceKind::VolumeSnapshotClass
            | ResourceKind::PodDisruptionBudget => Some(AggregationCategory::ConfigAndStorage),
            ResourceKind::ServiceAccount
            | ResourceKind::ClusterRoleBinding
            | ResourceKind::RoleBinding
            | ResourceKind::ClusterRole
            | ResourceKind::Role
            | ResourceKind::PodSecurityPolicy => Some(AggregationCategory::Rbac),
            ResourceKind::MutatingWebhookConfiguration
            | ResourceKind::ValidatingWebhookConfiguration => {
                Some(AggregationCategory::Administration)
            }
            ResourceKind::Alertmanager | ResourceKind::Prometheus | ResourceKind::ServiceMonitor => {
                Some(AggregationCategory::CustomResource)
            }
            ResourceKind::Event => Some(AggregationCategory::Events),
            ResourceKind::Namespace => Some(AggregationCategory::Namespaces),
            ResourceKind::Rollout
            | ResourceKind::Node
            | ResourceKind::Overview
            | ResourceKind::Containers => None,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<ResourceKind> for String {
    fn from(kind: ResourceKind) -> Self {
        kind.as_str().to_string()
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pod" => Ok(ResourceKind::Pod),
            "Deployment" => Ok(ResourceKind::Deployment),
            "ReplicaSet" => Ok(ResourceKind::ReplicaSet),
            "StatefulSet" => Ok(ResourceKind::StatefulSet),
            "DaemonSet" => Ok(ResourceKind::DaemonSet),
            "Job" => Ok(ResourceKind::Job),
            "CronJob" => Ok(ResourceKind::CronJob),
            "ReplicationController" => Ok(ResourceKind::ReplicationController),
            "Service" => Ok(ResourceKind::Service),
            "Ingress" => Ok(ResourceKind::Ingress),
            "Endpoints" => Ok(ResourceKind::Endpoints),
            "EndpointSlice" => Ok(ResourceKind::EndpointSlice),
            "NetworkPolicy" => Ok(ResourceKind::NetworkPolicy),
            "ConfigMap" => Ok(ResourceKind::ConfigMap),
            "Secret" => Ok(ResourceKind::Secret),
            "PersistentVolume" => Ok(ResourceKind::PersistentVolume),
            "PersistentVolumeClaim" => Ok(ResourceKind::PersistentVolumeClaim),
            "StorageClass" => Ok(ResourceKind::StorageClass),
            "VolumeSnapshot" => Ok(ResourceKind::VolumeSnapshot),
            "VolumeSnapshotContent" => Ok(ResourceKind::VolumeSnapshotContent),
            "VolumeSnapshotClass" => Ok(ResourceKind::VolumeSnapshotClass),
            "PodDisruptionBudget" => Ok(ResourceKind::PodDisruptionBudget),
            "ServiceAccount" => Ok(ResourceKind::ServiceAccount),
            "ClusterRoleBinding" => Ok(ResourceKind::ClusterRoleBinding),
            "RoleBinding" => Ok(ResourceKind::RoleBinding),
            "ClusterRole" => Ok(ResourceKind::ClusterRole),
            "Role" => Ok(ResourceKind::Role),
            "PodSecurityPolicy" => Ok(ResourceKind::PodSecurityPolicy),
            "MutatingWebhookConfiguration" => Ok(ResourceKind::MutatingWebhookConfiguration),
            "ValidatingWebhookConfiguration" => Ok(ResourceKind::ValidatingWebhookConfiguration),
            "Alertmanager" => Ok(ResourceKind::Alertmanager),
            "Prometheus" => Ok(ResourceKind::Prometheus),
            "ServiceMonitor" => Ok(ResourceKind::ServiceMonitor),
            "Event" => Ok(ResourceKind::Event),
            "Namespace" => Ok(ResourceKind::Namespace),
            "Rollout" => Ok(ResourceKind::Rollout),
            "Node" => Ok(ResourceKind::Node),
            "Overview" => Ok(ResourceKind::Overview),
            "Containers" => Ok(ResourceKind::Containers),
            _ => Err(format!("Unknown resource kind: {}", s)),
        }
    }
}
