#![allow(dead_code)]

//! Document store — whole-document JSON snapshots partitioned by
//! (app-id, user-id, entity-type), with live collection subscriptions.
//!
//! Carried in `AppState` as `Arc<dyn DocumentStore>` so the backend can be
//! swapped without touching handlers: `PgStore` in production, `MemStore` in
//! tests. The typed layer on top is `Collection<T>`.

pub mod changes;
pub mod collection;
pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::errors::AppError;

pub use collection::Collection;
pub use memory::MemStore;
pub use postgres::PgStore;

/// Composite partition key. Every stored document lives in exactly one
/// partition; every subscription is scoped to one partition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PartitionKey {
    pub app_id: String,
    pub user_id: Uuid,
    pub entity_type: &'static str,
}

impl PartitionKey {
    pub fn new(app_id: &str, user_id: Uuid, entity_type: &'static str) -> Self {
        Self {
            app_id: app_id.to_string(),
            user_id,
            entity_type,
        }
    }

    /// Canonical path form, used to key the change hub.
    pub fn path(&self) -> String {
        format!(
            "artifacts/{}/users/{}/{}",
            self.app_id, self.user_id, self.entity_type
        )
    }
}

/// A full-collection snapshot as published to subscribers.
pub type Snapshot = Arc<Vec<Value>>;

/// A typed entity persisted as a whole-document JSON snapshot.
pub trait Document: Serialize + DeserializeOwned + Send + Sync + 'static {
    const ENTITY_TYPE: &'static str;

    fn id(&self) -> Uuid;
    /// Assigns identity; document ids are server-generated.
    fn set_owner(&mut self, id: Uuid, user_id: Uuid);
    /// Refreshes `last_updated`. The collection layer calls this on every write.
    fn touch(&mut self, now: DateTime<Utc>);
    /// Required-field presence check, run before every write.
    fn validate(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Raw document store over JSON values. Object-safe so it can be injected as
/// `Arc<dyn DocumentStore>`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts or fully replaces one document.
    async fn put(&self, key: &PartitionKey, id: Uuid, doc: Value) -> Result<(), AppError>;
    async fn get(&self, key: &PartitionKey, id: Uuid) -> Result<Option<Value>, AppError>;
    /// Lists the partition's documents, most recently updated first.
    async fn list(&self, key: &PartitionKey) -> Result<Vec<Value>, AppError>;
    /// Returns true if a document was deleted.
    async fn delete(&self, key: &PartitionKey, id: Uuid) -> Result<bool, AppError>;
    /// Opens a live subscription on the partition. The first `recv` yields the
    /// current collection; every write to the partition publishes a fresh one.
    async fn subscribe(&self, key: &PartitionKey) -> Result<Subscription, AppError>;
}

/// A live handle on one partition's collection snapshots. The consumer owns
/// the subscription; dropping it (or calling `cancel`) ends delivery.
pub struct Subscription {
    initial: Option<Snapshot>,
    rx: broadcast::Receiver<Snapshot>,
}

impl Subscription {
    pub fn new(initial: Snapshot, rx: broadcast::Receiver<Snapshot>) -> Self {
        Self {
            initial: Some(initial),
            rx,
        }
    }

    /// Receives the next collection snapshot, or `None` once the store side
    /// has closed. A lagging consumer skips straight to the newest snapshot —
    /// snapshots are whole collections, so intermediate ones are disposable.
    pub async fn recv(&mut self) -> Option<Snapshot> {
        if let Some(snapshot) = self.initial.take() {
            return Some(snapshot);
        }
        loop {
            match self.rx.recv().await {
                Ok(snapshot) => return Some(snapshot),
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// Explicit teardown; equivalent to dropping the subscription.
    pub fn cancel(self) {}
}
