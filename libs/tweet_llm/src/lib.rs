use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod openai;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TEMPERATURE: f32 = 0.9;

#[derive(Debug, Clone)]
pub enum LLMProvider {
    OpenAI,
}

/// Text returned by the model for a single prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub text: String,
}

impl Completion {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[async_trait]
pub trait LLMService {
    async fn complete(&self, prompt: &str, temperature: f32) -> Result<Completion>;
}

#[derive(Debug, Clone)]
pub struct LLMClientConfig {
    pub model: String,
    pub temperature: f32,
}

impl Default for LLMClientConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

pub struct LLMClient {
    service: Box<dyn LLMService + Send + Sync>,
    config: LLMClientConfig,
}

impl LLMClient {
    pub fn new(
        provider: LLMProvider,
        api_key: String,
        org_id: Option<String>,
        api_base: Option<String>,
        config: Option<LLMClientConfig>,
    ) -> Self {
        let config = config.unwrap_or_default();
        let service: Box<dyn LLMService + Send + Sync> = match provider {
            LLMProvider::OpenAI => Box::new(openai::OpenAIService::new(
                api_key,
                org_id,
                api_base,
                config.model.clone(),
            )),
        };

        Self { service, config }
    }

    /// Wraps an already constructed service, e.g. a stub in tests.
    pub fn from_service(
        service: impl LLMService + Send + Sync + 'static,
        config: Option<LLMClientConfig>,
    ) -> Self {
        Self {
            service: Box::new(service),
            config: config.unwrap_or_default(),
        }
    }

    /// Sends one prompt and returns the completion. Provider errors are
    /// returned as-is; there is no retry.
    pub async fn execute_prompt(&self, prompt: &str) -> Result<Completion> {
        tracing::debug!(
            model = %self.config.model,
            temperature = self.config.temperature,
            prompt_len = prompt.len(),
            "requesting completion"
        );

        let completion = self
            .service
            .complete(prompt, self.config.temperature)
            .await?;

        tracing::debug!(completion_len = completion.text.len(), "completion received");
        Ok(completion)
    }
}
