//! Pipeline lifecycle hooks.
//!
//! [`PipelineHooks`] is how the pipeline talks to whatever is presenting
//! results: the script once it exists, the audio path once it is saved, and
//! any error along the way. Every method has a no-op default, so
//! implementations only override the events they care about.
//!
//! # Lifecycle Events
//!
//! 1. `on_script_start` → *text generation* → `on_script_ready`
//! 2. `on_synthesis_start` → *speech synthesis* → `on_audio_ready`
//! 3. `on_error` replaces the rest of the sequence once a stage fails

use std::fmt;
use std::path::Path;

use async_trait::async_trait;

use crate::error::Error;
use crate::mood::GenerationRequest;

/// Which pipeline stage an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Script generation.
    Script,
    /// Speech synthesis.
    Synthesis,
}

impl Stage {
    /// Short lower-case name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Script => "script",
            Self::Synthesis => "synthesis",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A shared, thread-safe [`PipelineHooks`] trait object.
pub type SharedPipelineHooks = std::sync::Arc<dyn PipelineHooks>;

/// Observer for pipeline progress.
#[async_trait]
pub trait PipelineHooks: Send + Sync {
    /// Called before the script is requested.
    async fn on_script_start(&self, _request: &GenerationRequest) {}

    /// Called with the trimmed script.
    async fn on_script_ready(&self, _script: &str) {}

    /// Called before synthesis begins.
    async fn on_synthesis_start(&self, _script: &str) {}

    /// Called once the audio file is written.
    async fn on_audio_ready(&self, _path: &Path) {}

    /// Called when a stage fails. The pipeline stops afterwards.
    async fn on_error(&self, _stage: Stage, _error: &Error) {}
}

/// A no-op implementation of [`PipelineHooks`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHooks;

#[async_trait]
impl PipelineHooks for NoopHooks {}

/// Log verbosity level for hook events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug-level logging.
    Debug,
    /// Info-level logging (default).
    #[default]
    Info,
}

/// Emit a log event at the specified level using `tracing` macros.
macro_rules! log_at_level {
    ($level:expr, $($arg:tt)*) => {
        match $level {
            LogLevel::Debug => tracing::debug!($($arg)*),
            LogLevel::Info  => tracing::info!($($arg)*),
        }
    };
}

/// A [`PipelineHooks`] implementation that logs events via `tracing`.
///
/// Errors are always logged at WARN.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingHooks {
    level: LogLevel,
}

impl LoggingHooks {
    /// Create logging hooks at INFO level.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create logging hooks with a custom level.
    #[must_use]
    pub const fn with_level(level: LogLevel) -> Self {
        Self { level }
    }
}

#[async_trait]
impl PipelineHooks for LoggingHooks {
    async fn on_script_start(&self, request: &GenerationRequest) {
        log_at_level!(self.level, mood = %request.mood, topic = %request.topic, "generating script");
    }

    async fn on_script_ready(&self, script: &str) {
        log_at_level!(self.level, chars = script.chars().count(), "script ready");
    }

    async fn on_synthesis_start(&self, _script: &str) {
        log_at_level!(self.level, "synthesizing speech");
    }

    async fn on_audio_ready(&self, path: &Path) {
        log_at_level!(self.level, path = %path.display(), "audio ready");
    }

    async fn on_error(&self, stage: Stage, error: &Error) {
        tracing::warn!(%stage, %error, "pipeline stage failed");
    }
}
