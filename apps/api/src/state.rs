use std::sync::Arc;

use crate::llm_client::CompletionModel;
use crate::store::DocumentStore;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once in `main`; handles are cheap to clone and shared across requests.
#[derive(Clone)]
pub struct AppState {
    /// Document store for analyses and accounts. Default: `PgDocumentStore`.
    pub store: Arc<dyn DocumentStore>,
    /// Completion model used by every analysis stage. Default: `LlmClient`.
    pub llm: Arc<dyn CompletionModel>,
}
