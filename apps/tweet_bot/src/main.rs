use std::env;

use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter, FmtSubscriber};
use tweet_bot::{
    core::config::Settings,
    services::tweet_generator_service::{TweetGeneratorService, UserInput},
    tone::{Tone, ToneSelection, ToneStyle},
    ui::{display::TweetView, input::prompt_user_input},
};
use tweet_llm::{LLMClient, LLMProvider};

/// Generate your next tweet from a description and a voice.
#[derive(Parser, Debug)]
#[command(name = "tweet_bot", version, about)]
struct Args {
    /// What the tweet should be about (or an existing tweet to rework)
    #[arg(short, long)]
    description: Option<String>,

    /// Voice of the tweet; repeat to combine several
    #[arg(short, long = "tone", value_enum)]
    tones: Vec<Tone>,

    /// How several tones are written into the prompt
    #[arg(long, value_enum)]
    tone_style: Option<ToneStyle>,

    /// Chat model to use instead of the configured one
    #[arg(long)]
    model: Option<String>,

    /// Disable colours and styling
    #[arg(long)]
    plain: bool,
}

fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber_builder = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_level(true)
        .with_span_events(FmtSpan::CLOSE);

    if env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "dev" {
        tracing::subscriber::set_global_default(
            subscriber_builder.compact().with_ansi(true).finish(),
        )
        .context("setting dev subscriber failed")?;
    } else {
        tracing::subscriber::set_global_default(
            subscriber_builder.json().with_ansi(false).finish(),
        )
        .context("setting prod subscriber failed")?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing()?;
    let args = Args::parse();
    let mut settings = Settings::load()?;

    if let Some(model) = args.model {
        settings.model = model;
    }
    if let Some(tone_style) = args.tone_style {
        settings.tone_style = tone_style;
    }

    let llm_client = LLMClient::new(
        LLMProvider::OpenAI,
        settings.api_key.clone().unwrap_or_default(),
        settings.org_id.clone(),
        settings.api_base.clone(),
        Some(settings.client_config()),
    );
    let generator = TweetGeneratorService::new(llm_client, settings.tone_style);

    let mut view = TweetView::stdout(args.plain);
    view.banner()?;

    let preset = UserInput::new(
        args.description.unwrap_or_default(),
        args.tones.into_iter().collect::<ToneSelection>(),
    );
    let Some(input) = prompt_user_input(preset)? else {
        return Ok(());
    };

    match generator.on_generate_clicked(&input).await? {
        Some(pair) => view.show_pair(&pair)?,
        None => view.notice("Describe your tweet and select at least one voice to generate.")?,
    }

    Ok(())
}
