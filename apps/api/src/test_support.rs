//! Fakes for the upstream seams, shared by unit tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm_client::{Completer, LlmError};
use crate::moderation::{ModerationVerdict, Moderator};

pub struct ScriptedCompleter {
    reply: Result<String, u16>,
    pub prompts: Mutex<Vec<(String, String)>>,
}

impl ScriptedCompleter {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            reply: Err(status),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl Completer for ScriptedCompleter {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        self.prompts
            .lock()
            .unwrap()
            .push((system.to_string(), prompt.to_string()));
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(status) => Err(LlmError::Api {
                status: *status,
                message: "upstream down".to_string(),
            }),
        }
    }
}

/// Flags inputs containing any of `flag_words`; fails when `unavailable`.
pub struct ListModerator {
    flag_words: Vec<&'static str>,
    unavailable: bool,
    calls: Mutex<Vec<String>>,
}

impl ListModerator {
    pub fn flagging(flag_words: Vec<&'static str>) -> Self {
        Self {
            flag_words,
            unavailable: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            flag_words: vec![],
            unavailable: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Moderator for ListModerator {
    async fn moderate(&self, input: &str) -> Result<ModerationVerdict, LlmError> {
        self.calls.lock().unwrap().push(input.to_string());
        if self.unavailable {
            return Err(LlmError::EmptyModeration);
        }
        let flagged = self.flag_words.iter().any(|w| input.contains(w));
        Ok(ModerationVerdict {
            flagged,
            categories: if flagged {
                vec!["harassment".to_string()]
            } else {
                vec![]
            },
        })
    }
}

