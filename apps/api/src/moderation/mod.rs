//! Moderation — content-policy classification of topics and generated suggestions.
//!
//! The classifier itself lives behind the `Moderator` trait (production impl:
//! `OpenAiClient`). This module owns the policy around it.
//!
//! KNOWN INCONSISTENCY: a failed moderation call is treated as a pass. The
//! service prefers availability over strict enforcement, so an outage of the
//! classifier lets unchecked text through. Kept deliberately until product
//! decides otherwise; every such pass is logged at WARN.

use async_trait::async_trait;
use tracing::warn;

use crate::llm_client::LlmError;

/// Outcome of a single moderation classification.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModerationVerdict {
    pub flagged: bool,
    /// Names of the categories that were hit, sorted.
    pub categories: Vec<String>,
}

impl ModerationVerdict {
    pub fn pass() -> Self {
        Self::default()
    }
}

/// Content-policy classifier. Carried in `AppState` as `Arc<dyn Moderator>`.
#[async_trait]
pub trait Moderator: Send + Sync {
    async fn moderate(&self, input: &str) -> Result<ModerationVerdict, LlmError>;
}

/// Classifies `text`, falling back to a passing verdict if the classifier fails.
pub async fn moderate_or_pass(moderator: &dyn Moderator, text: &str) -> ModerationVerdict {
    match moderator.moderate(text).await {
        Ok(verdict) => verdict,
        Err(e) => {
            warn!("Moderation unavailable, treating as pass: {e}");
            ModerationVerdict::pass()
        }
    }
}

/// Moderates each text in order, one call at a time, and returns every text
/// that was flagged. An empty result means all texts passed.
pub async fn collect_flagged(moderator: &dyn Moderator, texts: &[&str]) -> Vec<String> {
    let mut flagged = Vec::new();
    for &text in texts {
        if moderate_or_pass(moderator, text).await.flagged {
            flagged.push(text.to_string());
        }
    }
    flagged
}
