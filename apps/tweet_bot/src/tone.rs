use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Tone {
    Casual,
    Professional,
    Funny,
}

impl Tone {
    /// In the order the voice picker lists them.
    pub const ALL: [Tone; 3] = [Tone::Casual, Tone::Professional, Tone::Funny];

    pub fn label(self) -> &'static str {
        match self {
            Tone::Casual => "Casual",
            Tone::Professional => "Professional",
            Tone::Funny => "Funny",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tones picked by the user, kept in the order they were inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToneSelection {
    tones: Vec<Tone>,
}

impl ToneSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the tone was already selected.
    pub fn insert(&mut self, tone: Tone) -> bool {
        if self.tones.contains(&tone) {
            return false;
        }
        self.tones.push(tone);
        true
    }

    pub fn is_empty(&self) -> bool {
        self.tones.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tones.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Tone> + '_ {
        self.tones.iter().copied()
    }

    pub fn render(&self, style: ToneStyle) -> String {
        match style {
            ToneStyle::Literal => {
                let quoted: Vec<String> = self.iter().map(|t| format!("'{t}'")).collect();
                format!("{{{}}}", quoted.join(", "))
            }
            ToneStyle::Joined => {
                let labels: Vec<&str> = self.iter().map(Tone::label).collect();
                match labels.split_last() {
                    None => String::new(),
                    Some((last, [])) => last.to_string(),
                    Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
                }
            }
        }
    }
}

impl FromIterator<Tone> for ToneSelection {
    fn from_iter<I: IntoIterator<Item = Tone>>(iter: I) -> Self {
        let mut selection = ToneSelection::new();
        for tone in iter {
            selection.insert(tone);
        }
        selection
    }
}

/// How a selection is written into the `{option}` placeholder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ToneStyle {
    /// Set notation, e.g. `{'Casual', 'Funny'}`.
    #[default]
    Literal,
    /// Prose, e.g. `Casual and Funny`.
    Joined,
}

impl FromStr for ToneStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "literal" => Ok(ToneStyle::Literal),
            "joined" => Ok(ToneStyle::Joined),
            other => Err(ConfigError::Invalid(format!(
                "unknown tone style `{other}` (expected literal or joined)"
            ))),
        }
    }
}
