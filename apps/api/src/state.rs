use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Completion model handle. Production: `HfClient`; tests swap in a scripted fake.
    pub model: Arc<dyn CompletionModel>,
    pub config: Config,
}
