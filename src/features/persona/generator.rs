//! OpenAI-backed persona generation.
//!
//! One chat-completion call per run with fixed sampling parameters. No
//! streaming, no conversation history, no retry on malformed output.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use crate::features::persona::TextGenerator;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::{debug, info, warn};
use openai::chat::{ChatCompletion, ChatCompletionMessage, ChatCompletionMessageRole};
use uuid::Uuid;

/// Fixed sampling temperature for persona generation.
const TEMPERATURE: f32 = 0.7;

/// Fixed completion length cap.
const MAX_TOKENS: u64 = 500;

/// Prompt size above which a warning is logged before the call. Prompts are
/// never truncated; past this point the provider's input limit is the only
/// backstop.
const PROMPT_WARN_BYTES: usize = 400 * 1024;

/// Persona generator backed by the OpenAI chat-completion API.
pub struct PersonaGenerator {
    model: String,
}

impl PersonaGenerator {
    pub fn new(model: String) -> Self {
        Self { model }
    }
}

#[async_trait]
impl TextGenerator for PersonaGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request_id = Uuid::new_v4();

        if prompt.len() > PROMPT_WARN_BYTES {
            warn!(
                "[{request_id}] Prompt is {} bytes; the provider may reject it as too large",
                prompt.len()
            );
        }

        info!(
            "[{request_id}] Requesting persona from {} ({} byte prompt)",
            self.model,
            prompt.len()
        );

        let completion = ChatCompletion::builder(
            &self.model,
            vec![ChatCompletionMessage {
                role: ChatCompletionMessageRole::User,
                content: Some(prompt.to_string()),
                name: None,
                function_call: None,
                tool_call_id: None,
                tool_calls: None,
            }],
        )
        .temperature(TEMPERATURE)
        .max_tokens(MAX_TOKENS)
        .create()
        .await
        .map_err(|e| anyhow!("OpenAI API error: {e}"))?;

        if let Some(usage) = &completion.usage {
            debug!(
                "[{request_id}] Token usage - Prompt: {}, Completion: {}, Total: {}",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        let persona = completion
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| anyhow!("OpenAI response contained no completion choices"))?;

        Ok(persona.trim().to_string())
    }
}
