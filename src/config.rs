// ABOUTME: Configuration module for the reveal-slides library
// ABOUTME: Holds deck-level display options and application output settings

use crate::errors::{DeckError, Result};
use std::env::{self, VarError};
use std::fmt;
use std::path::PathBuf;

/// Where the generated document lands inside the reveal.js checkout.
pub const DEFAULT_OUTPUT_PATH: &str = "reveal.js/index.html";

/// Environment variable overriding [`DEFAULT_OUTPUT_PATH`].
pub const OUTPUT_PATH_ENV: &str = "REVEAL_SLIDES_OUTPUT";

/// Slide transition style understood by the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transition {
    None,
    Fade,
    #[default]
    Slide,
    Convex,
    Concave,
    Zoom,
}

impl Transition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Transition::None => "none",
            Transition::Fade => "fade",
            Transition::Slide => "slide",
            Transition::Convex => "convex",
            Transition::Concave => "concave",
            Transition::Zoom => "zoom",
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deck-wide settings interpolated into the document head and the
/// `Reveal.initialize` call.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentationConfig {
    pub title: String,
    pub description: String,
    pub author: String,
    pub controls: bool,
    pub progress: bool,
    pub center: bool,
    pub transition: Transition,
    pub math_enabled: bool,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            title: "RevealJS Rust DSL".to_string(),
            description: "Type-safe presentation framework".to_string(),
            author: "reveal-slides".to_string(),
            controls: true,
            progress: true,
            center: true,
            transition: Transition::Slide,
            math_enabled: true,
        }
    }
}

/// Application configuration for the `generate` entry point
#[derive(Debug, Clone)]
pub struct Config {
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let output_path = match env::var(OUTPUT_PATH_ENV) {
            Ok(value) if value.trim().is_empty() => {
                return Err(DeckError::ConfigError(format!(
                    "{} is set but empty",
                    OUTPUT_PATH_ENV
                )));
            }
            Ok(value) => PathBuf::from(value),
            Err(VarError::NotPresent) => PathBuf::from(DEFAULT_OUTPUT_PATH),
            Err(VarError::NotUnicode(raw)) => {
                return Err(DeckError::ConfigError(format!(
                    "{} is not valid UTF-8: {:?}",
                    OUTPUT_PATH_ENV, raw
                )));
            }
        };

        Ok(Self { output_path })
    }

    /// Override the output path, e.g. from a command-line flag
    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        if let Some(path) = output {
            self.output_path = path;
        }
        self
    }
}
