//! Snapshot acquisition and storage
//!
//! Everything that produces or holds `ResourceTreeResponse` values: the
//! source trait with its file and live-cluster implementations, the store the
//! rest of the application reads from, and the periodic refresh task.
//!
//! Structure:
//! - `file.rs` - Saved JSON payloads from disk
//! - `cluster.rs` - Live snapshots assembled via the Kubernetes API
//! - `store.rs` - Shared latest-snapshot state
//! - `refresh.rs` - Periodic polling task

pub mod cluster;
pub mod file;
pub mod refresh;
pub mod store;

pub use cluster::ClusterSource;
pub use file::FileSource;
pub use refresh::{refresh_once, spawn_refresh, RefreshEvent};
pub use store::SnapshotStore;

use std::path::PathBuf;

use async_trait::async_trait;

use crate::models::ResourceTreeResponse;

/// Snapshot acquisition errors
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse snapshot payload: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    #[error("snapshot source not found: {0}")]
    NotFound(String),

    #[error("invalid snapshot source configuration: {0}")]
    Config(String),
}

/// Result type for snapshot operations
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// A producer of resource-tree snapshots
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Fetch one complete snapshot
    async fn fetch(&self) -> SnapshotResult<ResourceTreeResponse>;

    /// Source type name for logging
    fn source_type(&self) -> &str;

    /// Health check (returns Ok if the source is reachable)
    async fn health_check(&self) -> SnapshotResult<()> {
        self.fetch().await?;
        Ok(())
    }
}

/// Create a snapshot source from CLI-level settings
///
/// A file path wins over a live cluster; the cluster source requires a
/// connected client.
pub fn create_source(
    file: Option<PathBuf>,
    client: Option<kube::Client>,
    namespace: String,
    selector: Option<String>,
) -> SnapshotResult<Box<dyn SnapshotSource>> {
    if let Some(path) = file {
        tracing::debug!("Creating file snapshot source: {:?}", path);
        return Ok(Box::new(FileSource::new(path)));
    }

    let client = client.ok_or_else(|| {
        SnapshotError::Config("a Kubernetes client is required without --file".to_string())
    })?;
    tracing::debug!("Creating cluster snapshot source for namespace {namespace}");
    Ok(Box::new(ClusterSource::new(client, namespace, selector)))
}
