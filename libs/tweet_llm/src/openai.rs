use anyhow::{Context, Result};
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessage,
        CreateChatCompletionRequest, CreateChatCompletionRequestArgs,
        CreateChatCompletionResponse,
    },
    Client,
};
use async_trait::async_trait;

use crate::{Completion, LLMService};

pub struct OpenAIService {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAIService {
    pub fn new(
        api_key: String,
        org_id: Option<String>,
        api_base: Option<String>,
        model: String,
    ) -> Self {
        let mut config = OpenAIConfig::new().with_api_key(api_key);
        if let Some(org_id) = org_id {
            config = config.with_org_id(org_id);
        }
        if let Some(api_base) = api_base {
            config = config.with_api_base(api_base);
        }
        let client = Client::with_config(config);

        Self { client, model }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_request(&self, prompt: &str, temperature: f32) -> Result<CreateChatCompletionRequest> {
        CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages([ChatCompletionRequestMessage::User(
                ChatCompletionRequestUserMessage {
                    content: prompt.to_string().into(),
                    name: None,
                },
            )])
            .temperature(temperature)
            .build()
            .context("Failed to build chat completion request")
    }
}

#[async_trait]
impl LLMService for OpenAIService {
    async fn complete(&self, prompt: &str, temperature: f32) -> Result<Completion> {
        let request = self.build_request(prompt, temperature)?;

        let response = self.client.chat().create(request).await?;

        if let Some(usage) = &response.usage {
            tracing::debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "chat completion usage"
            );
        }

        completion_from_response(response)
    }
}

/// Takes the first choice; a choice without content is an empty completion.
fn completion_from_response(response: CreateChatCompletionResponse) -> Result<Completion> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| anyhow::anyhow!("empty completion: no choices in response"))?;

    Ok(Completion::new(choice.message.content.unwrap_or_default()))
}
