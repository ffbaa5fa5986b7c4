use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::store::DocumentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable document store: `PgStore` in production, `MemStore` in tests.
    pub store: Arc<dyn DocumentStore>,
    pub llm: LlmClient,
    pub config: Config,
}
