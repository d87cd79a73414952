use std::env;

use tweet_llm::{LLMClientConfig, DEFAULT_MODEL, DEFAULT_TEMPERATURE};

use crate::core::error::ConfigError;
use crate::tone::ToneStyle;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const ORG_ID_VAR: &str = "OPENAI_ORG_ID";
pub const API_BASE_VAR: &str = "OPENAI_API_BASE";
pub const MODEL_VAR: &str = "TWEET_BOT_MODEL";
pub const TONE_STYLE_VAR: &str = "TWEET_BOT_TONE_STYLE";

/// Runtime settings, loaded once at startup and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_key: Option<String>,
    pub org_id: Option<String>,
    pub api_base: Option<String>,
    pub model: String,
    pub tone_style: ToneStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            org_id: None,
            api_base: None,
            model: DEFAULT_MODEL.to_string(),
            tone_style: ToneStyle::default(),
        }
    }
}

impl Settings {
    /// Builds settings from the process environment. Call after the `.env`
    /// file, if any, has been loaded.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_key = var(API_KEY_VAR);
        if api_key.is_none() {
            tracing::warn!(
                "{} is not set; completion requests will be rejected by the provider",
                API_KEY_VAR
            );
        }

        let tone_style = match var(TONE_STYLE_VAR) {
            Some(value) => value.parse()?,
            None => ToneStyle::default(),
        };

        Ok(Self {
            api_key,
            org_id: var(ORG_ID_VAR),
            api_base: var(API_BASE_VAR),
            model: var(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            tone_style,
        })
    }

    pub fn client_config(&self) -> LLMClientConfig {
        LLMClientConfig {
            model: self.model.clone(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}
