//! PostgreSQL document store backend.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::changes::ChangeHub;
use super::{DocumentStore, PartitionKey, Subscription};
use crate::errors::AppError;

/// Production document store: one JSONB row per document, keyed by the
/// composite partition key plus document id.
pub struct PgStore {
    pool: PgPool,
    hub: ChangeHub,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            hub: ChangeHub::default(),
        }
    }

    /// Ensures the documents table exists. Run once at startup.
    pub async fn ensure_schema(pool: &PgPool) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                app_id      TEXT        NOT NULL,
                user_id     UUID        NOT NULL,
                entity_type TEXT        NOT NULL,
                doc_id      UUID        NOT NULL,
                data        JSONB       NOT NULL,
                created_at  TIMESTAMPTZ NOT NULL DEFAULT now(),
                updated_at  TIMESTAMPTZ NOT NULL DEFAULT now(),
                PRIMARY KEY (app_id, user_id, entity_type, doc_id)
            )
            "#,
        )
        .execute(pool)
        .await?;
        Ok(())
    }

    async fn publish_snapshot(&self, key: &PartitionKey) -> Result<(), AppError> {
        let docs = self.list(key).await?;
        self.hub.publish(key, Arc::new(docs));
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for PgStore {
    async fn put(&self, key: &PartitionKey, id: Uuid, doc: Value) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO documents (app_id, user_id, entity_type, doc_id, data)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (app_id, user_id, entity_type, doc_id)
            DO UPDATE SET data = EXCLUDED.data, updated_at = now()
            "#,
        )
        .bind(&key.app_id)
        .bind(key.user_id)
        .bind(key.entity_type)
        .bind(id)
        .bind(&doc)
        .execute(&self.pool)
        .await?;

        self.publish_snapshot(key).await
    }

    async fn get(&self, key: &PartitionKey, id: Uuid) -> Result<Option<Value>, AppError> {
        let row = sqlx::query(
            "SELECT data FROM documents \
             WHERE app_id = $1 AND user_id = $2 AND entity_type = $3 AND doc_id = $4",
        )
        .bind(&key.app_id)
        .bind(key.user_id)
        .bind(key.entity_type)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.get::<Value, _>("data")))
    }

    async fn list(&self, key: &PartitionKey) -> Result<Vec<Value>, AppError> {
        let rows = sqlx::query(
            "SELECT data FROM documents \
             WHERE app_id = $1 AND user_id = $2 AND entity_type = $3 \
             ORDER BY updated_at DESC",
        )
        .bind(&key.app_id)
        .bind(key.user_id)
        .bind(key.entity_type)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| r.get::<Value, _>("data"))
            .collect())
    }

    async fn delete(&self, key: &PartitionKey, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query(
            "DELETE FROM documents \
             WHERE app_id = $1 AND user_id = $2 AND entity_type = $3 AND doc_id = $4",
        )
        .bind(&key.app_id)
        .bind(key.user_id)
        .bind(key.entity_type)
        .bind(id)
        .execute(&self.pool)
        .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            self.publish_snapshot(key).await?;
        }
        Ok(deleted)
    }

    async fn subscribe(&self, key: &PartitionKey) -> Result<Subscription, AppError> {
        // Register the receiver before reading the current state so a write
        // landing in between is not lost.
        let rx = self.hub.subscribe(key);
        let current = self.list(key).await?;
        Ok(Subscription::new(Arc::new(current), rx))
    }
}
