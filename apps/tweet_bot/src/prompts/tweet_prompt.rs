use super::template::PromptTemplate;
use crate::core::error::TemplateError;
use crate::services::tweet_generator_service::UserInput;
use crate::tone::ToneStyle;

pub const FIRST_TWEET_TEMPLATE: PromptTemplate = PromptTemplate::new(
    "Write me a very {option} tweet that is based on this description: {description}.
    Include two appropriate emojis and hashtags at the end of the tweet",
    &["description", "option"],
);

pub const SECOND_TWEET_TEMPLATE: PromptTemplate = PromptTemplate::new(
    "Write me another, different and very {option} tweet that is based on this description: {description}.
    Include two appropriate emojis and hashtags at the end of the tweet",
    &["description", "option"],
);

pub struct TweetPrompt;

impl TweetPrompt {
    /// Renders both tweet prompts for the same input.
    pub fn render(input: &UserInput, style: ToneStyle) -> Result<(String, String), TemplateError> {
        let option = input.tones.render(style);
        let values = [
            ("description", input.description.as_str()),
            ("option", option.as_str()),
        ];

        Ok((
            FIRST_TWEET_TEMPLATE.format(&values)?,
            SECOND_TWEET_TEMPLATE.format(&values)?,
        ))
    }
}
