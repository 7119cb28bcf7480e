//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Http(#[from] aoc_input::AocError),

    /// Fetching the input failed
    #[error("{0}")]
    Fetch(#[from] aoc_input::FetchError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
