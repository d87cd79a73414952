pub mod template;
pub mod tweet_prompt;
