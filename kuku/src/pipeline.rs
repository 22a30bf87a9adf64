//! The two-stage voice-note pipeline.
//!
//! [`Pipeline::run`] writes a script for a [`GenerationRequest`], then speaks
//! it. Stages run strictly in order; a failed stage stops the run and is
//! reported through [`PipelineHooks::on_error`]. The result is an
//! [`Outcome`] the caller matches on.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::audio::TextToSpeechProvider;
use crate::error::Error;
use crate::generate::TextGenerator;
use crate::hooks::{NoopHooks, PipelineHooks, SharedPipelineHooks, Stage};
use crate::mood::GenerationRequest;
use crate::script::ScriptGenerator;
use crate::synth::SpeechSynthesizer;

/// Result of one pipeline run.
#[derive(Debug)]
pub enum Outcome {
    /// Both stages succeeded.
    Completed {
        /// The trimmed script.
        script: String,
        /// Where the audio was written.
        audio_path: PathBuf,
    },
    /// The script was written but synthesis failed or was skipped.
    ScriptOnly {
        /// The trimmed script.
        script: String,
        /// Why there is no audio.
        error: Error,
    },
    /// Script generation failed; synthesis was not attempted.
    Failed {
        /// The generation error.
        error: Error,
    },
}

impl Outcome {
    /// The script, if stage one succeeded.
    #[must_use]
    pub fn script(&self) -> Option<&str> {
        match self {
            Self::Completed { script, .. } | Self::ScriptOnly { script, .. } => Some(script),
            Self::Failed { .. } => None,
        }
    }

    /// The audio path, if both stages succeeded.
    #[must_use]
    pub const fn audio_path(&self) -> Option<&PathBuf> {
        match self {
            Self::Completed { audio_path, .. } => Some(audio_path),
            _ => None,
        }
    }

    /// The error that stopped the run, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&Error> {
        match self {
            Self::Completed { .. } => None,
            Self::ScriptOnly { error, .. } | Self::Failed { error } => Some(error),
        }
    }

    /// Whether both stages succeeded.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

/// Command handler chaining a [`ScriptGenerator`] and a [`SpeechSynthesizer`].
pub struct Pipeline<G, P> {
    scripts: ScriptGenerator<G>,
    speech: SpeechSynthesizer<P>,
    hooks: SharedPipelineHooks,
}

impl<G, P> std::fmt::Debug for Pipeline<G, P>
where
    G: std::fmt::Debug,
    P: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("scripts", &self.scripts)
            .field("speech", &self.speech)
            .finish_non_exhaustive()
    }
}

impl<G: TextGenerator, P: TextToSpeechProvider> Pipeline<G, P> {
    /// Create a pipeline with no hooks.
    #[must_use]
    pub fn new(scripts: ScriptGenerator<G>, speech: SpeechSynthesizer<P>) -> Self {
        Self {
            scripts,
            speech,
            hooks: Arc::new(NoopHooks),
        }
    }

    /// Replace the hooks.
    #[must_use]
    pub fn with_hooks(mut self, hooks: impl PipelineHooks + 'static) -> Self {
        self.hooks = Arc::new(hooks);
        self
    }

    /// Replace the hooks with a shared instance.
    #[must_use]
    pub fn with_shared_hooks(mut self, hooks: SharedPipelineHooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Get the speech synthesizer.
    #[must_use]
    pub const fn speech(&self) -> &SpeechSynthesizer<P> {
        &self.speech
    }

    /// Run both stages for `request`.
    pub async fn run(&self, request: &GenerationRequest) -> Outcome {
        self.hooks.on_script_start(request).await;

        let script = match self
            .scripts
            .generate_script(request.mood.as_str(), &request.topic)
            .await
        {
            Ok(script) => script,
            Err(error) => {
                self.hooks.on_error(Stage::Script, &error).await;
                return Outcome::Failed { error };
            }
        };
        self.hooks.on_script_ready(&script).await;

        if script.is_empty() {
            let error = Error::EmptyScript;
            self.hooks.on_error(Stage::Synthesis, &error).await;
            return Outcome::ScriptOnly { script, error };
        }

        self.hooks.on_synthesis_start(&script).await;
        match self.speech.synthesize(&script).await {
            Ok(audio_path) => {
                self.hooks.on_audio_ready(&audio_path).await;
                info!(mood = %request.mood, path = %audio_path.display(), "voice note complete");
                Outcome::Completed { script, audio_path }
            }
            Err(error) => {
                self.hooks.on_error(Stage::Synthesis, &error).await;
                Outcome::ScriptOnly { script, error }
            }
        }
    }
}
