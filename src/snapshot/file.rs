//! File snapshot source
//!
//! Reads a saved resource-tree payload from disk. Used for development and
//! for replaying snapshots captured from a backend, without needing cluster
//! access.

use std::path::PathBuf;

use async_trait::async_trait;

use super::{SnapshotError, SnapshotResult, SnapshotSource};
use crate::models::ResourceTreeResponse;

/// Snapshot source backed by a JSON file
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl SnapshotSource for FileSource {
    async fn fetch(&self) -> SnapshotResult<ResourceTreeResponse> {
        tracing::debug!("Reading snapshot from file: {:?}", self.path);

        let contents = tokio::fs::read_to_string(&self.path).await?;
        let response: ResourceTreeResponse = serde_json::from_str(&contents)?;

        tracing::debug!(
            "Loaded snapshot with {} nodes from {:?}",
            response.nodes.len(),
            self.path
        );
        Ok(response)
    }

    fn source_type(&self) -> &str {
        "file"
    }

    async fn health_check(&self) -> SnapshotResult<()> {
        if !self.path.exists() {
            return Err(SnapshotError::NotFound(format!("{:?}", self.path)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_fetch_parses_payload() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "nodes": [
                    {{ "group": "apps", "version": "v1", "kind": "Deployment", "name": "web",
                       "health": {{ "status": "Healthy" }} }}
                ],
                "podMetadata": [],
                "status": "Healthy"
            }}"#
        )
        .unwrap();

        let source = FileSource::new(file.path().to_path_buf());
        let response = source.fetch().await.unwrap();
        assert_eq!(response.nodes.len(), 1);
        assert_eq!(response.nodes[0].id(), "apps/v1/Deployment/web");
        assert_eq!(response.status.as_deref(), Some("Healthy"));
        assert!(source.health_check().await.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_missing_file_is_io_error() {
        let source = FileSource::new(PathBuf::from("/nonexistent/snapshot.json"));
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, SnapshotError::Io(_)));

        let err = source.health_check().await.unwrap_err();
        assert!(matches!(err, SnapshotError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_fetch_malformed_payload_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let source = FileSource::new(file.path().to_path_buf());
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, SnapshotError::Parse(_)));
        assert_eq!(source.source_type(), "file");
    }
}
