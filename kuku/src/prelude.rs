//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use kuku::prelude::*;
//! ```

#[cfg(feature = "elevenlabs")]
pub use crate::providers::{ElevenLabs, ElevenLabsConfig};
#[cfg(feature = "gemini")]
pub use crate::providers::{Gemini, GeminiConfig};

pub use crate::audio::{
    AudioFormat, SharedSpeechProvider, SpeechRequest, SpeechResponse, TextToSpeechProvider,
    VoiceSettings,
};
pub use crate::error::{ApiError, ApiErrorKind, Error, Result};
pub use crate::generate::{SharedTextGenerator, TextGenerator};
pub use crate::hooks::{LogLevel, LoggingHooks, NoopHooks, PipelineHooks, SharedPipelineHooks, Stage};
pub use crate::mood::{GenerationRequest, Mood};
pub use crate::pipeline::{Outcome, Pipeline};
pub use crate::prompt::script_prompt;
pub use crate::script::ScriptGenerator;
pub use crate::synth::{SpeechSynthesizer, SynthesisSettings};
