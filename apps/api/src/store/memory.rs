#![allow(dead_code)]

//! In-memory document store with the same snapshot-and-subscribe semantics as
//! `PgStore`. Used by tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use super::changes::ChangeHub;
use super::{DocumentStore, PartitionKey, Subscription};
use crate::errors::AppError;

type Partition = Vec<(Uuid, Value)>;

#[derive(Default)]
pub struct MemStore {
    partitions: Mutex<HashMap<String, Partition>>,
    hub: ChangeHub,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Partition>> {
        self.partitions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Current partition contents, most recently updated first (matches the
    /// Postgres ordering; the collection layer stamps `lastUpdated` on every
    /// write).
    fn snapshot_of(&self, key: &PartitionKey) -> Vec<Value> {
        let partitions = self.lock();
        let mut docs: Partition = partitions.get(&key.path()).cloned().unwrap_or_default();
        docs.sort_by(|a, b| last_updated(&b.1).cmp(&last_updated(&a.1)));
        docs.into_iter().map(|(_, doc)| doc).collect()
    }

    fn publish_snapshot(&self, key: &PartitionKey) {
        self.hub.publish(key, Arc::new(self.snapshot_of(key)));
    }
}

fn last_updated(doc: &Value) -> &str {
    doc.get("lastUpdated").and_then(Value::as_str).unwrap_or("")
}

#[async_trait]
impl DocumentStore for MemStore {
    async fn put(&self, key: &PartitionKey, id: Uuid, doc: Value) -> Result<(), AppError> {
        {
            let mut partitions = self.lock();
            let partition = partitions.entry(key.path()).or_default();
            match partition.iter_mut().find(|(doc_id, _)| *doc_id == id) {
                Some(slot) => slot.1 = doc,
                None => partition.push((id, doc)),
            }
        }
        self.publish_snapshot(key);
        Ok(())
    }

    async fn get(&self, key: &PartitionKey, id: Uuid) -> Result<Option<Value>, AppError> {
        let partitions = self.lock();
        Ok(partitions.get(&key.path()).and_then(|partition| {
            partition
                .iter()
                .find(|(doc_id, _)| *doc_id == id)
                .map(|(_, doc)| doc.clone())
        }))
    }

    async fn list(&self, key: &PartitionKey) -> Result<Vec<Value>, AppError> {
        Ok(self.snapshot_of(key))
    }

    async fn delete(&self, key: &PartitionKey, id: Uuid) -> Result<bool, AppError> {
        let deleted = {
            let mut partitions = self.lock();
            match partitions.get_mut(&key.path()) {
                Some(partition) => {
                    let before = partition.len();
                    partition.retain(|(doc_id, _)| *doc_id != id);
                    partition.len() < before
                }
                None => false,
            }
        };
        if deleted {
            self.publish_snapshot(key);
        }
        Ok(deleted)
    }

    async fn subscribe(&self, key: &PartitionKey) -> Result<Subscription, AppError> {
        let rx = self.hub.subscribe(key);
        Ok(Subscription::new(Arc::new(self.snapshot_of(key)), rx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn key(user_id: Uuid) -> PartitionKey {
        PartitionKey::new("test-app", user_id, "jobApplications")
    }

    #[tokio::test]
    async fn test_put_then_get_round_trips() {
        let store = MemStore::new();
        let user = Uuid::new_v4();
        let id = Uuid::new_v4();

        store
            .put(&key(user), id, json!({"title": "Engineer"}))
            .await
            .unwrap();

        let doc = store.get(&key(user), id).await.unwrap().unwrap();
        assert_eq!(doc["title"], "Engineer");
    }

    #[tokio::test]
    async fn test_partitions_are_isolated_by_user() {
        let store = MemStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let id = Uuid::new_v4();

        store.put(&key(alice), id, json!({"title": "A"})).await.unwrap();

        assert!(store.get(&key(bob), id).await.unwrap().is_none());
        assert!(store.list(&key(bob)).await.unwrap().is_empty());
        assert_eq!(store.list(&key(alice)).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_put_replaces_existing_document() {
        let store = MemStore::new();
        let user = Uuid::new_v4();
        let id = Uuid::new_v4();

        store.put(&key(user), id, json!({"title": "v1"})).await.unwrap();
        store.put(&key(user), id, json!({"title": "v2"})).await.unwrap();

        let docs = store.list(&key(user)).await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0]["title"], "v2");
    }

    #[tokio::test]
    async fn test_delete_reports_whether_document_existed() {
        let store = MemStore::new();
        let user = Uuid::new_v4();
        let id = Uuid::new_v4();

        store.put(&key(user), id, json!({})).await.unwrap();
        assert!(store.delete(&key(user), id).await.unwrap());
        assert!(!store.delete(&key(user), id).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_orders_most_recently_updated_first() {
        let store = MemStore::new();
        let user = Uuid::new_v4();

        store
            .put(
                &key(user),
                Uuid::new_v4(),
                json!({"title": "old", "lastUpdated": "2026-01-01T00:00:00Z"}),
            )
            .await
            .unwrap();
        store
            .put(
                &key(user),
                Uuid::new_v4(),
                json!({"title": "new", "lastUpdated": "2026-06-01T00:00:00Z"}),
            )
            .await
            .unwrap();

        let docs = store.list(&key(user)).await.unwrap();
        assert_eq!(docs[0]["title"], "new");
        assert_eq!(docs[1]["title"], "old");
    }

    #[tokio::test]
    async fn test_subscription_yields_initial_then_post_write_snapshot() {
        let store = MemStore::new();
        let user = Uuid::new_v4();

        store
            .put(&key(user), Uuid::new_v4(), json!({"title": "first"}))
            .await
            .unwrap();

        let mut sub = store.subscribe(&key(user)).await.unwrap();

        let initial = sub.recv().await.unwrap();
        assert_eq!(initial.len(), 1);

        store
            .put(&key(user), Uuid::new_v4(), json!({"title": "second"}))
            .await
            .unwrap();

        let updated = sub.recv().await.unwrap();
        assert_eq!(updated.len(), 2);
    }

    #[tokio::test]
    async fn test_cancelled_subscription_stops_receiving() {
        let store = MemStore::new();
        let user = Uuid::new_v4();

        let sub = store.subscribe(&key(user)).await.unwrap();
        sub.cancel();

        // A write after cancel only needs to not panic; there is no receiver.
        store.put(&key(user), Uuid::new_v4(), json!({})).await.unwrap();
    }
}
