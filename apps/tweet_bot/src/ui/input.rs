use dialoguer::{Confirm, Input, MultiSelect};
use std::io::IsTerminal;

use crate::core::error::AppError;
use crate::services::tweet_generator_service::UserInput;
use crate::tone::{Tone, ToneSelection};

pub const DESCRIPTION_PROMPT: &str = "1. Describe Your Tweet (Or Copy and Paste and Existing One)";
pub const VOICE_PROMPT: &str = "2. Select Your Voice";
pub const GENERATE_PROMPT: &str = "Generate Tweet";

/// Fills in whatever the command line left out by asking on the terminal.
///
/// Returns `Ok(None)` when the user declines to generate. Without a terminal
/// the preset is returned unchanged.
pub fn prompt_user_input(preset: UserInput) -> Result<Option<UserInput>, AppError> {
    if !std::io::stdin().is_terminal() {
        return Ok(Some(preset));
    }

    let mut input = preset;
    let mut asked = false;

    if input.description.is_empty() {
        input.description = Input::<String>::new()
            .with_prompt(DESCRIPTION_PROMPT)
            .allow_empty(true)
            .interact_text()?;
        asked = true;
    }

    if input.tones.is_empty() {
        let labels: Vec<&str> = Tone::ALL.iter().map(|tone| tone.label()).collect();
        let picked = MultiSelect::new()
            .with_prompt(VOICE_PROMPT)
            .items(&labels)
            .interact()?;
        // indices come back in list order, not click order
        input.tones = picked
            .into_iter()
            .filter_map(|idx| Tone::ALL.get(idx).copied())
            .collect::<ToneSelection>();
        asked = true;
    }

    if asked {
        let generate = Confirm::new()
            .with_prompt(GENERATE_PROMPT)
            .default(true)
            .interact()?;
        if !generate {
            return Ok(None);
        }
    }

    Ok(Some(input))
}
