//! Error type for the CLI.

use kuku::hooks::Stage;
use kuku::pipeline::Outcome;

use crate::config::ConfigError;

/// Result type for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;

/// Anything that makes a command exit non-zero.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration could not be loaded or is incomplete.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// A client could not be built.
    #[error(transparent)]
    Kuku(#[from] kuku::Error),

    /// A pipeline stage failed.
    #[error("{stage} stage failed: {message}")]
    Stage {
        /// Which stage.
        stage: Stage,
        /// The stage error as shown to the user.
        message: String,
    },

    /// Filesystem error outside the pipeline.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Create a configuration error from a message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(ConfigError::InvalidValue(msg.into()))
    }

    /// The failure carried by a pipeline run that did not complete.
    ///
    /// A run that produced a script failed at synthesis; otherwise the script
    /// stage failed.
    pub fn from_outcome(outcome: &Outcome) -> Self {
        let stage = if outcome.script().is_some() {
            Stage::Synthesis
        } else {
            Stage::Script
        };
        let message = outcome
            .error()
            .map_or_else(|| "no error reported".to_owned(), ToString::to_string);
        Self::Stage { stage, message }
    }
}
