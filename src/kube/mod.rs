//! Kubernetes client module
//!
//! Handles connection to the Kubernetes API server and provides the small
//! amount of kubeconfig introspection the header banner needs.

use anyhow::Result;
use kube::{Client, Config};
use url::Url;

/// Initialize and return a Kubernetes client
///
/// Uses the default kubeconfig loading strategy:
/// 1. In-cluster config (if running in a pod)
/// 2. KUBECONFIG environment variable
/// 3. ~/.kube/config
pub async fn create_client() -> Result<Client> {
    let config = Config::infer().await?;

    if let Ok(url) = Url::parse(&config.cluster_url.to_string()) {
        if let Some(host) = url.host_str() {
            tracing::debug!("Connecting to cluster at {}", host);
        }
    }

    let client = Client::try_from(config)?;
    Ok(client)
}

/// Get the current Kubernetes context name
pub async fn get_context() -> Result<String> {
    // Try to get context from KUBECONFIG or default location
    let kubeconfig_path = std::env::var("KUBECONFIG").ok().or_else(|| {
        let home = std::env::var("HOME").ok()?;
        Some(format!("{}/.kube/config", home))
    });

    if let Some(path) = kubeconfig_path {
        if let Ok(contents) = std::fs::read_to_string(&path) {
            for line in contents.lines() {
                if line.trim().starts_with("current-context:") {
                    if let Some(context) = line.split(':').nth(1) {
                        return Ok(context.trim().to_string());
                    }
                }
            }
        }
    }

    // Fallback: confirm a config is reachable, then use a default name
    let _config = Config::infer().await?;
    Ok("default".to_string())
}

/// Get the namespace to snapshot
///
/// The NAMESPACE environment variable overrides the configured default;
/// an empty value falls back to "default".
pub fn get_default_namespace(configured: &str) -> String {
    if let Ok(ns) = std::env::var("NAMESPACE") {
        if !ns.is_empty() {
            return ns;
        }
    }
    if configured.is_empty() {
        "default".to_string()
    } else {
        configured.to_string()
    }
}
