// Post generation: request clamping, tone, prompting, completion parsing, pipeline.
// All provider calls go through llm_client — no direct HTTP calls here.

pub mod generator;
pub mod handlers;
pub mod parser;
pub mod prompts;
pub mod request;
pub mod tone;
