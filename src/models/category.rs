//! Aggregation categories for the resource tree
//!
//! Every resource kind maps to exactly one coarse category; the declared
//! variant order here is the order categories appear in the rendered tree.

use std::fmt;

use crate::models::resource_kind::ResourceKind;

/// Coarse grouping bucket for the resource tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AggregationCategory {
    Workloads,
    Networking,
    ConfigAndStorage,
    Rbac,
    Administration,
    CustomResource,
    OtherResources,
    Events,
    Namespaces,
}

impl AggregationCategory {
    /// Get the display name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            AggregationCategory::Workloads => "Workloads",
            AggregationCategory::Networking => "Networking",
            AggregationCategory::ConfigAndStorage => "Config & Storage",
            AggregationCategory::Rbac => "RBAC",
            AggregationCategory::Administration => "Administration",
            AggregationCategory::CustomResource => "Custom Resource",
            AggregationCategory::OtherResources => "Other Resources",
            AggregationCategory::Events => "Events",
            AggregationCategory::Namespaces => "Namespaces",
        }
    }

    /// All categories in display order
    pub fn all() -> &'static [Self] {
        &[
            AggregationCategory::Workloads,
            AggregationCategory::Networking,
            AggregationCategory::ConfigAndStorage,
            AggregationCategory::Rbac,
            AggregationCategory::Administration,
            AggregationCategory::CustomResource,
            AggregationCategory::OtherResources,
            AggregationCategory::Events,
            AggregationCategory::Namespaces,
        ]
    }
}

impl fmt::Display for AggregationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Map a raw kind string to its aggregation category
///
/// Matching is exact (case-sensitive) against the known vocabulary. Unknown
/// kinds are not an error: they land in Other Resources when
/// `default_to_other` is set, otherwise in Custom Resource.
pub fn classify(kind: &str, default_to_other: bool) -> AggregationCategory {
    let fallback = if default_to_other {
        AggregationCategory::OtherResources
    } else {
        AggregationCategory::CustomResource
    };

    match ResourceKind::parse_optional(kind) {
        Some(known) => known.category().unwrap_or(fallback),
        None => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workload_kinds_classify_to_workloads() {
        for kind in [
            "Pod",
            "Deployment",
            "ReplicaSet",
            "StatefulSet",
            "DaemonSet",
            "Job",
            "CronJob",
            "ReplicationController",
        ] {
            assert_eq!(classify(kind, false), AggregationCategory::Workloads);
        }
    }

    #[test]
    fn test_networking_and_storage_kinds() {
        for kind in ["Service", "Ingress", "Endpoints", "EndpointSlice", "NetworkPolicy"] {
            assert_eq!(classify(kind, false), AggregationCategory::Networking);
        }
        for kind in [
            "ConfigMap",
            "Secret",
            "PersistentVolume",
            "PersistentVolumeClaim",
            "StorageClass",
            "VolumeSnapshot",
            "VolumeSnapshotContent",
            "VolumeSnapshotClass",
            "PodDisruptionBudget",
        ] {
            assert_eq!(classify(kind, false), AggregationCategory::ConfigAndStorage);
        }
    }

    #[test]
    fn test_rbac_admin_and_monitoring_kinds() {
        for kind in [
            "ServiceAccount",
            "ClusterRoleBinding",
            "RoleBinding",
            "ClusterRole",
            "Role",
            "PodSecurityPolicy",
        ] {
            assert_eq!(classify(kind, false), AggregationCategory::Rbac);
        }
        for kind in ["MutatingWebhookConfiguration", "ValidatingWebhookConfiguration"] {
            assert_eq!(classify(kind, false), AggregationCategory::Administration);
        }
        for kind in ["Alertmanager", "Prometheus", "ServiceMonitor"] {
            assert_eq!(classify(kind, false), AggregationCategory::CustomResource);
        }
    }

    #[test]
    fn test_singleton_category_kinds() {
        assert_eq!(classify("Event", false), AggregationCategory::Events);
        assert_eq!(classify("Namespace", false), AggregationCategory::Namespaces);
    }

    #[test]
    fn test_unknown_kind_fallback() {
        // Known kinds without a bucket take the same fallback as unknown ones
        assert_eq!(classify("Rollout", false), AggregationCategory::CustomResource);
        assert_eq!(classify("Rollout", true), AggregationCategory::OtherResources);
        assert_eq!(classify("Node", false), AggregationCategory::CustomResource);
        assert_eq!(classify("FooBar", false), AggregationCategory::CustomResource);
        assert_eq!(classify("FooBar", true), AggregationCategory::OtherResources);
        // Lowercase misses the exact-match vocabulary on purpose
        assert_eq!(classify("deployment", false), AggregationCategory::CustomResource);
    }

    #[test]
    fn test_classify_is_deterministic() {
        for kind in ResourceKind::all() {
            let first = classify(kind.as_str(), false);
            for _ in 0..3 {
                assert_eq!(classify(kind.as_str(), false), first);
            }
        }
    }

    #[test]
    fn test_display_strings() {
        assert_eq!(AggregationCategory::ConfigAndStorage.to_string(), "Config & Storage");
        assert_eq!(AggregationCategory::Rbac.to_string(), "RBAC");
        assert_eq!(AggregationCategory::OtherResources.to_string(), "Other Resources");
    }

    #[test]
    fn test_all_order_matches_display_order() {
        let names: Vec<&str> = AggregationCategory::all().iter().map(|c| c.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Workloads",
                "Networking",
                "Config & Storage",
                "RBAC",
                "Administration",
                "Custom Resource",
                "Other Resources",
                "Events",
                "Namespaces",
            ]
        );
    }
}
