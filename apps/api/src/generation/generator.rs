//! Post Generation — orchestrates the full generation pipeline.
//!
//! Flow: moderate topic → build prompt → LLM complete → parse →
//!       moderate suggestions (structured path only) → return.
//!
//! Input is already validated and clamped by `GenerationRequest`.

use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::parser::{parse_completion, ParsedCompletion};
use crate::generation::prompts::{build_generation_prompt, GENERATION_SYSTEM};
use crate::generation::request::GenerationRequest;
use crate::llm_client::Completer;
use crate::moderation::{collect_flagged, moderate_or_pass, Moderator};

/// A single generated post. Length is requested from the model, not enforced
/// (except on the fallback path, which truncates).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub text: String,
}

/// Successful response body for `POST /api/generate`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub tweets: Vec<Suggestion>,
}

/// Runs the generation pipeline for one request.
///
/// Steps:
/// 1. moderate topic (fail-open) → reject if flagged
/// 2. build system + user prompt
/// 3. completer.complete() → raw text (errors propagate as 500)
/// 4. parse_completion() → Structured | Fallback
/// 5. Structured: moderate each suggestion in order; any flag rejects all
/// 6. Fallback: returned as-is, NOT moderated
pub async fn generate_suggestions(
    completer: &dyn Completer,
    moderator: &dyn Moderator,
    request: &GenerationRequest,
) -> Result<Vec<Suggestion>, AppError> {
    // Step 1: Input moderation
    let verdict = moderate_or_pass(moderator, &request.topic).await;
    if verdict.flagged {
        warn!("Topic rejected by moderation: {:?}", verdict.categories);
        return Err(AppError::InputFlagged {
            categories: verdict.categories,
        });
    }

    // Step 2: Prompt
    let prompt = build_generation_prompt(request);

    // Step 3: Completion
    info!(
        "Generating {} suggestions (tone={}, max_chars={})",
        request.count,
        request.tone.label(),
        request.max_chars
    );
    let raw = completer.complete(GENERATION_SYSTEM, &prompt).await?;

    // Step 4: Parse
    let suggestions = match parse_completion(&raw, request.count, request.max_chars) {
        ParsedCompletion::Fallback(suggestions) => {
            // Unparseable output skips output moderation entirely.
            warn!(
                "Completion was not valid JSON; returning {} line-split suggestions unmoderated",
                suggestions.len()
            );
            return Ok(suggestions);
        }
        ParsedCompletion::Structured(suggestions) => suggestions,
    };

    // Step 5: Output moderation, sequential
    let texts: Vec<&str> = suggestions.iter().map(|s| s.text.as_str()).collect();
    let flagged = collect_flagged(moderator, &texts).await;
    if !flagged.is_empty() {
        warn!(
            "{} of {} generated suggestions flagged; rejecting response",
            flagged.len(),
            suggestions.len()
        );
        return Err(AppError::OutputFlagged { flagged });
    }

    info!("Returning {} moderated suggestions", suggestions.len());
    Ok(suggestions)
}
