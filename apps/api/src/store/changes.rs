//! In-process change fan-out for document store subscriptions.

use std::collections::HashMap;
use std::sync::Mutex;

use tokio::sync::broadcast;

use super::{PartitionKey, Snapshot};

/// Bounded per-partition buffer. Slow subscribers skip to the latest snapshot.
const CHANNEL_CAPACITY: usize = 16;

/// Broadcast hub keyed by partition path. Senders are created lazily on the
/// first subscriber and kept for the life of the store.
#[derive(Default)]
pub struct ChangeHub {
    channels: Mutex<HashMap<String, broadcast::Sender<Snapshot>>>,
}

impl ChangeHub {
    pub fn subscribe(&self, key: &PartitionKey) -> broadcast::Receiver<Snapshot> {
        let mut channels = self
            .channels
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        channels
            .entry(key.path())
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
            .subscribe()
    }

    /// Publishes a fresh collection snapshot to the partition's subscribers.
    /// A partition nobody watches is skipped.
    pub fn publish(&self, key: &PartitionKey, snapshot: Snapshot) {
        let channels = self
            .channels
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(tx) = channels.get(&key.path()) {
            // send only errors when every receiver is gone; nothing to do then.
            let _ = tx.send(snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_subscriber_receives_published_snapshot() {
        let hub = ChangeHub::default();
        let key = PartitionKey::new("app", Uuid::new_v4(), "resumes");

        let mut rx = hub.subscribe(&key);
        hub.publish(&key, Arc::new(vec![serde_json::json!({"name": "CV"})]));

        let snapshot = rx.recv().await.unwrap();
        assert_eq!(snapshot.len(), 1);
    }

    #[tokio::test]
    async fn test_publish_is_scoped_to_partition() {
        let hub = ChangeHub::default();
        let user = Uuid::new_v4();
        let resumes = PartitionKey::new("app", user, "resumes");
        let jobs = PartitionKey::new("app", user, "jobApplications");

        let mut resumes_rx = hub.subscribe(&resumes);
        let mut jobs_rx = hub.subscribe(&jobs);
        hub.publish(&jobs, Arc::new(vec![]));

        assert!(jobs_rx.recv().await.is_ok());
        assert!(resumes_rx.try_recv().is_err());
    }
}
