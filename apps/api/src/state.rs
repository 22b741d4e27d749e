use std::sync::Arc;

use crate::llm_client::Completer;
use crate::moderation::Moderator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable; requests share nothing else.
#[derive(Clone)]
pub struct AppState {
    /// Chat-completion backend. Default: `OpenAiClient`.
    pub completer: Arc<dyn Completer>,
    /// Moderation backend. Default: the same `OpenAiClient`.
    pub moderator: Arc<dyn Moderator>,
}
