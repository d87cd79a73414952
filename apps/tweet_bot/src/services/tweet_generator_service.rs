use parking_lot::Mutex;
use tweet_llm::{Completion, LLMClient};

use crate::core::error::AppError;
use crate::prompts::tweet_prompt::TweetPrompt;
use crate::tone::{ToneSelection, ToneStyle};

/// What the user entered for one generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserInput {
    pub description: String,
    pub tones: ToneSelection,
}

impl UserInput {
    pub fn new(description: impl Into<String>, tones: ToneSelection) -> Self {
        Self {
            description: description.into(),
            tones,
        }
    }

    /// Generation only runs with a description and at least one tone.
    pub fn is_complete(&self) -> bool {
        !self.description.is_empty() && !self.tones.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TweetPair {
    pub first: Completion,
    pub second: Completion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationState {
    Idle,
    Requesting,
    Displaying,
}

pub struct TweetGeneratorService {
    llm_client: LLMClient,
    tone_style: ToneStyle,
    state: Mutex<GenerationState>,
}

impl TweetGeneratorService {
    pub fn new(llm_client: LLMClient, tone_style: ToneStyle) -> Self {
        Self {
            llm_client,
            tone_style,
            state: Mutex::new(GenerationState::Idle),
        }
    }

    pub fn state(&self) -> GenerationState {
        *self.state.lock()
    }

    pub fn reset(&self) {
        *self.state.lock() = GenerationState::Idle;
    }

    /// Handles the "Generate Tweet" action.
    ///
    /// Returns `Ok(None)` without contacting the model when the input is
    /// incomplete. Otherwise both prompts are sent one after the other and
    /// the two completions are returned in request order.
    pub async fn on_generate_clicked(
        &self,
        input: &UserInput,
    ) -> Result<Option<TweetPair>, AppError> {
        if !input.is_complete() {
            tracing::info!("generation skipped: description or tone selection is empty");
            return Ok(None);
        }

        let (first_prompt, second_prompt) = TweetPrompt::render(input, self.tone_style)?;

        *self.state.lock() = GenerationState::Requesting;
        tracing::info!(tones = input.tones.len(), "generating tweets");

        match self.request_pair(&first_prompt, &second_prompt).await {
            Ok(pair) => {
                *self.state.lock() = GenerationState::Displaying;
                Ok(Some(pair))
            }
            Err(e) => {
                tracing::error!("tweet generation failed: {}", e);
                self.reset();
                Err(AppError::Generation(e))
            }
        }
    }

    async fn request_pair(
        &self,
        first_prompt: &str,
        second_prompt: &str,
    ) -> anyhow::Result<TweetPair> {
        let first = self.llm_client.execute_prompt(first_prompt).await?;
        let second = self.llm_client.execute_prompt(second_prompt).await?;
        Ok(TweetPair { first, second })
    }
}
