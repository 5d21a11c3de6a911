//! Runtime configuration.

use std::fmt;
use std::path::PathBuf;

/// How responses are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// One JSON document per response.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
        })
    }
}

/// Configuration for a StatPad session and its REPL.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Primary prompt.
    pub prompt: String,

    /// Maximum number of history entries kept by the line editor.
    pub history_size: usize,

    /// Response format.
    pub format: OutputFormat,

    /// Snapshot to load at startup.
    pub catalog_path: Option<PathBuf>,

    /// Start from the built-in teams, seasons and sample data.
    pub seed: bool,

    /// Whether to show the welcome banner.
    pub show_banner: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            prompt: "statpad> ".to_string(),
            history_size: 1000,
            format: OutputFormat::Text,
            catalog_path: None,
            seed: false,
            show_banner: true,
        }
    }
}

impl RuntimeConfig {
    /// Builder method to set the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Builder method to set the history size.
    #[must_use]
    pub fn with_history_size(mut self, size: usize) -> Self {
        self.history_size = size;
        self
    }

    /// Builder method to set the output format.
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Builder method to load a snapshot at startup.
    #[must_use]
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    /// Builder method to start from the built-in data.
    #[must_use]
    pub fn with_seed(mut self, seed: bool) -> Self {
        self.seed = seed;
        self
    }

    /// Builder method to show or hide the banner.
    #[must_use]
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }
}
