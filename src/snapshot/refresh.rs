//! Periodic snapshot refresh
//!
//! Polls the snapshot source on a fixed cadence, publishes each result into
//! the store, and notifies the UI over a channel. Fetch failures are reported
//! as events and logged; the loop keeps polling.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::{SnapshotResult, SnapshotSource, SnapshotStore};

/// Notification emitted after each refresh attempt
#[derive(Debug, Clone)]
pub enum RefreshEvent {
    /// A snapshot was published; carries the node count
    Published(usize),
    /// The fetch failed; the previous snapshot stays in place
    Failed(String),
}

/// Fetch one snapshot and publish it into the store
pub async fn refresh_once(
    source: &dyn SnapshotSource,
    store: &SnapshotStore,
) -> SnapshotResult<usize> {
    let response = source.fetch().await?;
    let count = response.nodes.len();
    store.publish(response).await;
    Ok(count)
}

/// Spawn the periodic refresh task
///
/// The first tick fires immediately so the UI has data at startup. The task
/// runs until the receiver is dropped.
pub fn spawn_refresh(
    source: Arc<dyn SnapshotSource>,
    store: SnapshotStore,
    interval_secs: u64,
) -> (JoinHandle<()>, mpsc::UnboundedReceiver<RefreshEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();

    let handle = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs.max(1)));
        loop {
            ticker.tick().await;
            let event = match refresh_once(source.as_ref(), &store).await {
                Ok(count) => {
                    tracing::debug!("Refreshed snapshot from {}: {} nodes", source.source_type(), count);
                    RefreshEvent::Published(count)
                }
                Err(e) => {
                    tracing::warn!("Snapshot refresh failed: {}", e);
                    RefreshEvent::Failed(e.to_string())
                }
            };
            if tx.send(event).is_err() {
                // UI is gone, stop polling
                break;
            }
        }
    });

    (handle, rx)
}
