use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::system_prompt::generation_prompt;

/// Request body for the Messages API, with the generation prompt as `system`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRequest {
    pub model: String,
    pub max_tokens: u32,
    pub system: String,
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl MessageRequest {
    /// Build a request whose system prompt is the generation prompt, unmodified.
    ///
    /// User messages keep their order. Nothing is sent.
    pub fn new(model: &str, max_tokens: u32, user_messages: &[String]) -> Result<Self> {
        if model.trim().is_empty() {
            bail!("Model name is empty");
        }
        if max_tokens == 0 {
            bail!("max_tokens must be greater than zero");
        }
        if user_messages.is_empty() {
            bail!("At least one user message is required");
        }
        if let Some(index) = user_messages.iter().position(|m| m.trim().is_empty()) {
            bail!("User message #{} is empty", index + 1);
        }

        debug!(?model, ?max_tokens, count = user_messages.len(), "Building request");

        Ok(Self {
            model: model.to_string(),
            max_tokens,
            system: generation_prompt().to_string(),
            messages: user_messages
                .iter()
                .map(|content| Message {
                    role: "user".to_string(),
                    content: content.clone(),
                })
                .collect(),
        })
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize request")
    }
}
