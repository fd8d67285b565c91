// std imports
use std::io::{self, IsTerminal, Write};

// third-party imports
use config::ConfigError;
use owo_colors::OwoColorize;
use thiserror::Error;

// ---

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Pattern(#[from] wildcard::Error),
    #[error("invalid pattern #{index} {pattern:?}: {source}")]
    InvalidPattern {
        index: usize,
        pattern: String,
        source: wildcard::Error,
    },
}

impl Error {
    /// Writes the error to the standard error stream, styled if it is a terminal.
    pub fn log(&self) {
        let stderr = io::stderr();
        let styled = stderr.is_terminal();
        self.log_to(&mut stderr.lock(), styled).ok();
    }

    /// Writes the error followed by optional tips to `target`.
    pub fn log_to<W: Write>(&self, target: &mut W, styled: bool) -> io::Result<()> {
        if styled {
            writeln!(target, "{} {}", "error:".bright_red().bold(), self)?;
        } else {
            writeln!(target, "error: {}", self)?;
        }

        if let Some(tip) = self.tip() {
            if styled {
                writeln!(target, "{} {}", "  tip:".green().bold(), tip)?;
            } else {
                writeln!(target, "  tip: {}", tip)?;
            }
        }

        Ok(())
    }

    fn tip(&self) -> Option<&'static str> {
        let kind = match self {
            Self::Pattern(err) => err.kind,
            Self::InvalidPattern { source, .. } => source.kind,
            _ => return None,
        };

        match kind {
            wildcard::ErrorKind::ExpectedClass | wildcard::ErrorKind::UnterminatedClass => {
                Some(r"use \[ to match a literal bracket")
            }
            wildcard::ErrorKind::InvertedRange { .. } => Some("list the lower bound of a range first"),
            wildcard::ErrorKind::UnterminatedEscape => Some(r"use \\ to match a literal backslash"),
        }
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests;
