use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Body shape is `{ "error": "..." }` plus an optional detail field per variant.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Topic flagged by moderation")]
    InputFlagged { categories: Vec<String> },

    #[error("Generated content flagged by moderation")]
    OutputFlagged { flagged: Vec<String> },

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::InputFlagged { categories } => (
                StatusCode::BAD_REQUEST,
                json!({ "error": self.to_string(), "categories": categories }),
            ),
            AppError::OutputFlagged { flagged } => (
                StatusCode::BAD_REQUEST,
                json!({ "error": self.to_string(), "flagged": flagged }),
            ),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                json!({ "error": self.to_string() }),
            ),
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Generation failed", "details": e.to_string() }),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Generation failed", "details": e.to_string() }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
