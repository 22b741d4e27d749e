//! Axum route handlers for the Generation API.

use axum::{body::Bytes, extract::State, Json};

use crate::errors::AppError;
use crate::generation::generator::{generate_suggestions, GenerateResponse};
use crate::generation::request::GenerationRequest;
use crate::state::AppState;

/// POST /api/generate
///
/// Body: `{ topic, tone?, count?, maxChars? }`. The body is read as raw bytes
/// and parsed here, so a missing content-type or invalid UTF-8 still gets the
/// JSON error contract instead of an extractor rejection.
pub async fn handle_generate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<GenerateResponse>, AppError> {
    let request = GenerationRequest::from_body(&body)?;

    let tweets =
        generate_suggestions(state.completer.as_ref(), state.moderator.as_ref(), &request).await?;

    Ok(Json(GenerateResponse { tweets }))
}

/// Any method other than POST on /api/generate.
pub async fn handle_method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
