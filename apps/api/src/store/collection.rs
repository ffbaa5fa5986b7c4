//! Typed collection layer over the raw document store.

use std::marker::PhantomData;
use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use uuid::Uuid;

use super::{Document, DocumentStore, PartitionKey, Subscription};
use crate::errors::AppError;

/// Typed CRUD + subscribe over one entity type in one partition. Handlers
/// construct these per request; all state lives behind the store.
pub struct Collection<T: Document> {
    store: Arc<dyn DocumentStore>,
    key: PartitionKey,
    _marker: PhantomData<T>,
}

impl<T: Document> Collection<T> {
    pub fn new(store: Arc<dyn DocumentStore>, app_id: &str, user_id: Uuid) -> Self {
        Self {
            store,
            key: PartitionKey::new(app_id, user_id, T::ENTITY_TYPE),
            _marker: PhantomData,
        }
    }

    /// Validates, stamps `last_updated`, and writes the whole document.
    /// Returns the document as persisted.
    pub async fn save(&self, mut doc: T) -> Result<T, AppError> {
        doc.validate()?;
        doc.touch(Utc::now());
        let value = serde_json::to_value(&doc).context("Failed to serialize document")?;
        self.store.put(&self.key, doc.id(), value).await?;
        Ok(doc)
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<T>, AppError> {
        match self.store.get(&self.key, id).await? {
            Some(value) => Ok(Some(
                serde_json::from_value(value).context("Failed to deserialize document")?,
            )),
            None => Ok(None),
        }
    }

    pub async fn list(&self) -> Result<Vec<T>, AppError> {
        let values = self.store.list(&self.key).await?;
        let mut docs = Vec::with_capacity(values.len());
        for value in values {
            docs.push(serde_json::from_value(value).context("Failed to deserialize document")?);
        }
        Ok(docs)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        self.store.delete(&self.key, id).await
    }

    /// Live raw-JSON snapshots of the collection; see `Subscription`.
    pub async fn subscribe(&self) -> Result<Subscription, AppError> {
        self.store.subscribe(&self.key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::{JobApplication, JobPlatform, JobStatus};
    use crate::store::MemStore;

    fn collection(user_id: Uuid) -> Collection<JobApplication> {
        Collection::new(Arc::new(MemStore::new()), "test-app", user_id)
    }

    fn job(title: &str, company: &str) -> JobApplication {
        JobApplication {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            title: title.to_string(),
            company: company.to_string(),
            platform: JobPlatform::LinkedIn,
            link: None,
            status: JobStatus::Applied,
            date_applied: None,
            notes: None,
            job_description: None,
            last_updated: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_save_then_get_round_trips_typed_document() {
        let user = Uuid::new_v4();
        let jobs = collection(user);

        let saved = jobs.save(job("Engineer", "Acme")).await.unwrap();
        let loaded = jobs.get(saved.id).await.unwrap().unwrap();

        assert_eq!(loaded.title, "Engineer");
        assert_eq!(loaded.company, "Acme");
    }

    #[tokio::test]
    async fn test_save_refreshes_last_updated() {
        let jobs = collection(Uuid::new_v4());

        let mut doc = job("Engineer", "Acme");
        let stale = Utc::now() - chrono::Duration::days(30);
        doc.last_updated = stale;

        let saved = jobs.save(doc).await.unwrap();
        assert!(saved.last_updated > stale);
    }

    #[tokio::test]
    async fn test_save_rejects_missing_required_fields() {
        let jobs = collection(Uuid::new_v4());

        let err = jobs.save(job("", "Acme")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = jobs.save(job("Engineer", "  ")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_removes_document() {
        let jobs = collection(Uuid::new_v4());

        let saved = jobs.save(job("Engineer", "Acme")).await.unwrap();
        assert!(jobs.delete(saved.id).await.unwrap());
        assert!(jobs.get(saved.id).await.unwrap().is_none());
    }
}
