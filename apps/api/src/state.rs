use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum
/// extractors. Immutable after startup — concurrent requests share nothing
/// mutable.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Kept alongside the client for handlers that need runtime settings.
    #[allow(dead_code)]
    pub config: Config,
}
