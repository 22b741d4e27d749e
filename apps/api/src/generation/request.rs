//! Request parsing — turns a loosely-typed JSON body into a clamped `GenerationRequest`.
//!
//! Out-of-range `count` / `maxChars` are clamped, never rejected. Values that
//! are not numeric at all fall back to the defaults.

use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::generation::tone::Tone;

pub const MIN_COUNT: usize = 1;
pub const MAX_COUNT: usize = 10;
pub const DEFAULT_COUNT: usize = 3;

pub const MIN_MAX_CHARS: usize = 64;
pub const MAX_MAX_CHARS: usize = 280;
pub const DEFAULT_MAX_CHARS: usize = 220;

/// Body of `POST /api/generate` as sent by clients. Every field is optional at
/// this layer so that clamping and validation can decide what is acceptable.
#[derive(Debug, Default, Deserialize)]
pub struct RawGenerateRequest {
    #[serde(default)]
    pub topic: Option<Value>,
    #[serde(default)]
    pub tone: Option<Value>,
    #[serde(default)]
    pub count: Option<Value>,
    #[serde(default, rename = "maxChars")]
    pub max_chars: Option<Value>,
}

/// A validated generation request. `topic` is trimmed and non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub topic: String,
    pub tone: Tone,
    pub count: usize,
    pub max_chars: usize,
}

impl GenerationRequest {
    /// Parses a raw request body. Malformed JSON and blank topics are validation errors.
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        let raw: RawGenerateRequest = serde_json::from_slice(body)
            .map_err(|e| AppError::Validation(format!("Invalid JSON body: {e}")))?;
        Self::from_raw(raw)
    }

    pub fn from_raw(raw: RawGenerateRequest) -> Result<Self, AppError> {
        let topic = raw.topic.as_ref().map(value_as_text).unwrap_or_default();
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(AppError::Validation("Topic is required".to_string()));
        }

        Ok(GenerationRequest {
            topic: topic.to_string(),
            tone: Tone::from_label(raw.tone.as_ref().map(value_as_text).as_deref()),
            count: clamp_numeric(raw.count.as_ref(), MIN_COUNT, MAX_COUNT, DEFAULT_COUNT),
            max_chars: clamp_numeric(
                raw.max_chars.as_ref(),
                MIN_MAX_CHARS,
                MAX_MAX_CHARS,
                DEFAULT_MAX_CHARS,
            ),
        })
    }
}

/// Coerces a scalar JSON value to text; containers and null become empty.
fn value_as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Reads a number (or numeric string), truncates toward zero, and clamps into
/// `[min, max]`. Anything non-numeric yields `default`.
pub fn clamp_numeric(value: Option<&Value>, min: usize, max: usize, default: usize) -> usize {
    let number = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match number {
        Some(n) if n.is_finite() => {
            let n = n.trunc();
            if n <= min as f64 {
                min
            } else if n >= max as f64 {
                max
            } else {
                n as usize
            }
        }
        _ => default,
    }
}
