//! Generic CRUD + watch plumbing shared by all entity handlers.

use std::convert::Infallible;

use axum::response::sse::{Event, KeepAlive, Sse};
use futures::stream::Stream;
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;
use crate::store::{Collection, Document};

/// The caller's collection for one entity type, scoped by the configured
/// tenant and the requesting user.
pub fn collection<T: Document>(state: &AppState, user_id: Uuid) -> Collection<T> {
    Collection::new(state.store.clone(), &state.config.app_id, user_id)
}

/// Creates a document with a server-generated id.
pub async fn create<T: Document>(
    state: &AppState,
    user_id: Uuid,
    mut doc: T,
) -> Result<T, AppError> {
    doc.set_owner(Uuid::new_v4(), user_id);
    collection::<T>(state, user_id).save(doc).await
}

/// Whole-document replace at a known id. The id must already exist.
pub async fn update<T: Document>(
    state: &AppState,
    user_id: Uuid,
    id: Uuid,
    mut doc: T,
) -> Result<T, AppError> {
    if collection::<T>(state, user_id).get(id).await?.is_none() {
        return Err(not_found::<T>(id));
    }
    doc.set_owner(id, user_id);
    collection::<T>(state, user_id).save(doc).await
}

pub async fn fetch<T: Document>(state: &AppState, user_id: Uuid, id: Uuid) -> Result<T, AppError> {
    collection::<T>(state, user_id)
        .get(id)
        .await?
        .ok_or_else(|| not_found::<T>(id))
}

pub async fn list<T: Document>(state: &AppState, user_id: Uuid) -> Result<Vec<T>, AppError> {
    collection::<T>(state, user_id).list().await
}

pub async fn remove<T: Document>(state: &AppState, user_id: Uuid, id: Uuid) -> Result<(), AppError> {
    if collection::<T>(state, user_id).delete(id).await? {
        Ok(())
    } else {
        Err(not_found::<T>(id))
    }
}

fn not_found<T: Document>(id: Uuid) -> AppError {
    AppError::NotFound(format!("Document {id} not found in {}", T::ENTITY_TYPE))
}

/// Bridges a store subscription into an SSE stream of full-collection JSON
/// snapshots. The client gets the current collection immediately, then a
/// fresh snapshot after every write; disconnecting drops the subscription.
pub async fn watch<T: Document>(
    state: &AppState,
    user_id: Uuid,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, AppError> {
    let subscription = collection::<T>(state, user_id).subscribe().await?;
    let stream = futures::stream::unfold(subscription, |mut subscription| async move {
        let snapshot = subscription.recv().await?;
        let payload = serde_json::to_string(&*snapshot).ok()?;
        Some((
            Ok::<_, Infallible>(Event::default().data(payload)),
            subscription,
        ))
    });
    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::llm_client::LlmClient;
    use crate::models::job::JobApplication;
    use crate::store::MemStore;
    use std::sync::Arc;

    fn test_state() -> AppState {
        AppState {
            store: Arc::new(MemStore::new()),
            llm: LlmClient::new("test-key".to_string()),
            config: Config {
                database_url: "postgres://unused".to_string(),
                anthropic_api_key: "test-key".to_string(),
                app_id: "test-app".to_string(),
                port: 0,
                rust_log: "info".to_string(),
            },
        }
    }

    fn job_body(title: &str) -> JobApplication {
        serde_json::from_value(serde_json::json!({
            "title": title,
            "company": "Acme",
            "platform": "LinkedIn",
            "status": "Applied"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_assigns_server_side_identity() {
        let state = test_state();
        let user = Uuid::new_v4();

        let created = create(&state, user, job_body("Engineer")).await.unwrap();
        assert_eq!(created.user_id, user);

        let fetched: JobApplication = fetch(&state, user, created.id).await.unwrap();
        assert_eq!(fetched.title, "Engineer");
    }

    #[tokio::test]
    async fn test_update_requires_existing_document() {
        let state = test_state();
        let user = Uuid::new_v4();

        let err = update(&state, user, Uuid::new_v4(), job_body("Engineer"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_preserves_document_id() {
        let state = test_state();
        let user = Uuid::new_v4();

        let created = create(&state, user, job_body("Engineer")).await.unwrap();
        let updated = update(&state, user, created.id, job_body("Staff Engineer"))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Staff Engineer");
        assert_eq!(list::<JobApplication>(&state, user).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_remove_missing_document_is_not_found() {
        let state = test_state();
        let user = Uuid::new_v4();

        let created = create(&state, user, job_body("Engineer")).await.unwrap();
        remove::<JobApplication>(&state, user, created.id).await.unwrap();

        let err = remove::<JobApplication>(&state, user, created.id)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_documents_are_scoped_to_their_user() {
        let state = test_state();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        let created = create(&state, alice, job_body("Engineer")).await.unwrap();

        let err = fetch::<JobApplication>(&state, bob, created.id)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
