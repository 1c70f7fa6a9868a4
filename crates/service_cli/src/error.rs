//! CLI error types.

use thiserror::Error;

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Error, Debug)]
pub enum CliError {
    /// An argument value was not usable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Experiment configuration was rejected.
    #[error(transparent)]
    Config(#[from] montelab_mc::experiment::ConfigError),

    /// A sampling utility rejected its input.
    #[error(transparent)]
    Sampling(#[from] montelab_mc::sampling::SamplingError),

    /// A classic generator rejected its parameters.
    #[error(transparent)]
    Generator(#[from] montelab_core::generators::GeneratorError),

    /// JSON serialisation failed.
    #[error("serialisation failed: {0}")]
    Json(#[from] serde_json::Error),
}
