use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures a snippet can report.
///
/// Only the squaring snippet rejects input; `UnknownDay` comes from parsing
/// a `Day` out of text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SnippetError {
    #[error("Negative number not allowed")]
    NegativeNumber { value: f64 },

    #[error("Unknown day name: '{0}'")]
    UnknownDay(String),
}

impl SnippetError {
    pub fn negative_number(value: f64) -> Self {
        Self::NegativeNumber { value }
    }
}

/// Errors loading the tour configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
