use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tweet_bot::core::error::AppError;
use tweet_bot::services::tweet_generator_service::{
    GenerationState, TweetGeneratorService, UserInput,
};
use tweet_bot::tone::{Tone, ToneSelection, ToneStyle};
use tweet_bot::ui::display::{TweetView, SEPARATOR};
use tweet_llm::{Completion, LLMClient, LLMService};

#[derive(Clone, Default)]
struct ScriptedService {
    prompts: Arc<Mutex<Vec<(String, f32)>>>,
    replies: Arc<Mutex<VecDeque<anyhow::Result<Completion>>>>,
}

impl ScriptedService {
    fn replying(replies: Vec<anyhow::Result<Completion>>) -> Self {
        Self {
            prompts: Arc::default(),
            replies: Arc::new(Mutex::new(replies.into())),
        }
    }

    fn prompts(&self) -> Vec<(String, f32)> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LLMService for ScriptedService {
    async fn complete(&self, prompt: &str, temperature: f32) -> anyhow::Result<Completion> {
        self.prompts
            .lock()
            .unwrap()
            .push((prompt.to_string(), temperature));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(anyhow::anyhow!("no scripted reply left")))
    }
}

fn generator(service: &ScriptedService, style: ToneStyle) -> TweetGeneratorService {
    TweetGeneratorService::new(LLMClient::from_service(service.clone(), None), style)
}

fn tones(list: &[Tone]) -> ToneSelection {
    list.iter().copied().collect()
}

#[tokio::test]
async fn complete_input_issues_two_distinct_prompts_in_order() {
    let service = ScriptedService::replying(vec![
        Ok(Completion::new("A")),
        Ok(Completion::new("B")),
    ]);
    let generator = generator(&service, ToneStyle::Literal);
    let input = UserInput::new("launching a new product", tones(&[Tone::Funny]));

    let pair = generator
        .on_generate_clicked(&input)
        .await
        .unwrap()
        .expect("input is complete");

    assert_eq!(pair.first.text, "A");
    assert_eq!(pair.second.text, "B");
    assert_eq!(generator.state(), GenerationState::Displaying);

    let prompts = service.prompts();
    assert_eq!(prompts.len(), 2);
    assert_ne!(prompts[0].0, prompts[1].0);
    assert_eq!(
        prompts[0].0,
        "Write me a very {'Funny'} tweet that is based on this description: launching a new product.\n    Include two appropriate emojis and hashtags at the end of the tweet"
    );
    assert!(prompts[1].0.starts_with("Write me another, different and very {'Funny'} tweet"));
    for (prompt, temperature) in &prompts {
        assert!(prompt.contains("launching a new product"));
        assert_eq!(*temperature, 0.9);
    }
}

#[tokio::test]
async fn incomplete_input_never_reaches_the_model() {
    let service = ScriptedService::default();
    let generator = generator(&service, ToneStyle::Literal);

    let cases = [
        UserInput::new("", tones(&[Tone::Casual])),
        UserInput::new("a launch", ToneSelection::new()),
        UserInput::default(),
    ];

    for input in &cases {
        let outcome = generator.on_generate_clicked(input).await.unwrap();
        assert!(outcome.is_none());
        assert_eq!(generator.state(), GenerationState::Idle);
    }
    assert!(service.prompts().is_empty());
}

#[tokio::test]
async fn whitespace_description_still_generates() {
    let service = ScriptedService::replying(vec![
        Ok(Completion::new("A")),
        Ok(Completion::new("B")),
    ]);
    let generator = generator(&service, ToneStyle::Literal);
    let input = UserInput::new("   ", tones(&[Tone::Funny]));

    let pair = generator.on_generate_clicked(&input).await.unwrap();

    assert!(pair.is_some());
    let prompts = service.prompts();
    assert_eq!(prompts.len(), 2);
    assert!(prompts[0].0.contains("description:    ."));
}

#[tokio::test]
async fn first_failure_stops_before_second_request() {
    let service = ScriptedService::replying(vec![Err(anyhow::anyhow!(
        "Incorrect API key provided"
    ))]);
    let generator = generator(&service, ToneStyle::Literal);
    let input = UserInput::new("coffee", tones(&[Tone::Professional]));

    let err = generator.on_generate_clicked(&input).await.unwrap_err();

    assert!(matches!(err, AppError::Generation(_)));
    assert_eq!(err.to_string(), "Incorrect API key provided");
    assert_eq!(service.prompts().len(), 1);
    assert_eq!(generator.state(), GenerationState::Idle);
}

#[tokio::test]
async fn second_failure_propagates_after_both_requests() {
    let service = ScriptedService::replying(vec![
        Ok(Completion::new("A")),
        Err(anyhow::anyhow!("connection reset")),
    ]);
    let generator = generator(&service, ToneStyle::Literal);
    let input = UserInput::new("coffee", tones(&[Tone::Casual]));

    let err = generator.on_generate_clicked(&input).await.unwrap_err();

    assert_eq!(err.to_string(), "connection reset");
    assert_eq!(service.prompts().len(), 2);
}

#[tokio::test]
async fn joined_style_writes_tones_as_prose() {
    let service = ScriptedService::replying(vec![
        Ok(Completion::new("A")),
        Ok(Completion::new("B")),
    ]);
    let generator = generator(&service, ToneStyle::Joined);
    let input = UserInput::new("a hackathon win", tones(&[Tone::Casual, Tone::Funny]));

    generator.on_generate_clicked(&input).await.unwrap();

    let prompts = service.prompts();
    assert!(prompts[0].0.starts_with("Write me a very Casual and Funny tweet"));
    assert!(prompts[1]
        .0
        .starts_with("Write me another, different and very Casual and Funny tweet"));
}

#[tokio::test]
async fn generated_pair_is_displayed_first_separator_second() {
    let service = ScriptedService::replying(vec![
        Ok(Completion::new("A")),
        Ok(Completion::new("B")),
    ]);
    let generator = generator(&service, ToneStyle::Literal);
    let input = UserInput::new("new release", tones(&[Tone::Funny]));

    let pair = generator.on_generate_clicked(&input).await.unwrap().unwrap();
    let mut view = TweetView::new(Vec::new(), true);
    view.show_pair(&pair).unwrap();

    let out = String::from_utf8(view.into_inner()).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines, vec!["A", SEPARATOR, "B"]);

    generator.reset();
    assert_eq!(generator.state(), GenerationState::Idle);
}
