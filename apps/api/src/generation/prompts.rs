// All LLM prompt constants for the Generation module.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::generation::request::GenerationRequest;

/// System instruction for post generation. Fixed for every request.
pub const GENERATION_SYSTEM: &str = "You are a social media copywriter for crypto creators. \
    Write short, original posts suitable for X/Twitter. \
    NEVER give financial advice: no buy/sell recommendations, no price targets, \
    no guaranteed returns, no 'not financial advice' disclaimers used as cover. \
    Do not impersonate real people. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object.";

/// Generation prompt template.
/// Fixed values ({count}, {tone_guidance}, {max_chars}) are filled first; the
/// client-supplied {tone} and {topic} are filled together in a single pass.
pub const GENERATION_PROMPT_TEMPLATE: &str = r#"Write {count} distinct tweet variations in a {tone} tone.
{tone_guidance}
Each tweet MUST be under {max_chars} characters, including hashtags and emoji.

Return STRICT JSON with this EXACT schema and nothing else:
{"tweets": [{"text": "..."}]}

TOPIC:
{topic}"#;

static USER_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(tone|topic)\}").expect("static regex is valid"));

/// Fills the generation template for a validated request.
///
/// Tone and topic are client text, so they are inserted last and in one pass:
/// placeholders inside them are never expanded.
pub fn build_generation_prompt(request: &GenerationRequest) -> String {
    let tone_guidance = request
        .tone
        .guidance()
        .map(|g| format!("Style: {g}"))
        .unwrap_or_default();

    let template = GENERATION_PROMPT_TEMPLATE
        .replace("{count}", &request.count.to_string())
        .replace("{tone_guidance}", &tone_guidance)
        .replace("{max_chars}", &request.max_chars.to_string());

    USER_PLACEHOLDER
        .replace_all(&template, |caps: &Captures| match &caps[1] {
            "tone" => request.tone.label().to_string(),
            _ => request.topic.clone(),
        })
        .into_owned()
}
