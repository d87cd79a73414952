use console::Style;
use std::io::{self, Write};

use crate::services::tweet_generator_service::TweetPair;

pub const TITLE: &str = "Tweet Generator";
pub const HEADER: &str = "Generate Your Next Tweet with Tweet Bot";
pub const SEPARATOR: &str = "────────────────────────────────────────";

/// Writes the generator's output to a terminal or any other writer.
pub struct TweetView<W: Write> {
    out: W,
    plain: bool,
}

impl TweetView<io::Stdout> {
    pub fn stdout(plain: bool) -> Self {
        Self::new(io::stdout(), plain)
    }
}

impl<W: Write> TweetView<W> {
    pub fn new(out: W, plain: bool) -> Self {
        Self { out, plain }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.plain {
            text.to_string()
        } else {
            style.apply_to(text).to_string()
        }
    }

    pub fn banner(&mut self) -> io::Result<()> {
        let title = self.paint(TITLE, Style::new().bold().cyan());
        let header = self.paint(HEADER, Style::new().bold());
        writeln!(self.out, "{title}")?;
        writeln!(self.out, "{header}")?;
        writeln!(self.out)
    }

    /// First tweet, separator, second tweet.
    pub fn show_pair(&mut self, pair: &TweetPair) -> io::Result<()> {
        let separator = self.paint(SEPARATOR, Style::new().dim());
        writeln!(self.out, "{}", pair.first)?;
        writeln!(self.out, "{separator}")?;
        writeln!(self.out, "{}", pair.second)?;
        self.out.flush()
    }

    pub fn notice(&mut self, message: &str) -> io::Result<()> {
        let message = self.paint(message, Style::new().yellow());
        writeln!(self.out, "{message}")
    }
}
