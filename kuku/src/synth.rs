//! Stage two: speak the script and persist the audio.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::audio::{SpeechRequest, TextToSpeechProvider, VoiceSettings};
use crate::error::Result;

/// Fixed voice parameters and output location for synthesis.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisSettings {
    /// Voice identity.
    pub voice_id: String,
    /// Synthesis model identifier.
    pub model_id: String,
    /// Voice-quality parameters.
    pub voice_settings: VoiceSettings,
    /// Where the audio is written. Overwritten on every success.
    pub output_path: PathBuf,
}

impl SynthesisSettings {
    /// Default voice (Rachel).
    pub const DEFAULT_VOICE_ID: &'static str = "EXAVITQu4vr4xnSDxMaL";
    /// Default output file.
    pub const DEFAULT_OUTPUT_PATH: &'static str = "ai_audio.mp3";

    /// Sets the voice identity.
    #[must_use]
    pub fn with_voice_id(mut self, voice_id: impl Into<String>) -> Self {
        self.voice_id = voice_id.into();
        self
    }

    /// Sets the synthesis model.
    #[must_use]
    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    /// Sets the voice-quality parameters.
    #[must_use]
    pub const fn with_voice_settings(mut self, settings: VoiceSettings) -> Self {
        self.voice_settings = settings;
        self
    }

    /// Sets the output path.
    #[must_use]
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }
}

impl Default for SynthesisSettings {
    fn default() -> Self {
        Self {
            voice_id: Self::DEFAULT_VOICE_ID.to_owned(),
            model_id: SpeechRequest::DEFAULT_MODEL.to_owned(),
            voice_settings: VoiceSettings::default(),
            output_path: PathBuf::from(Self::DEFAULT_OUTPUT_PATH),
        }
    }
}

/// Turns script text into an audio file through a [`TextToSpeechProvider`].
#[derive(Debug, Clone)]
pub struct SpeechSynthesizer<P> {
    provider: P,
    settings: SynthesisSettings,
}

impl<P: TextToSpeechProvider> SpeechSynthesizer<P> {
    /// Create a synthesizer with the default voice and output path.
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self::with_settings(provider, SynthesisSettings::default())
    }

    /// Create a synthesizer with explicit settings.
    #[must_use]
    pub const fn with_settings(provider: P, settings: SynthesisSettings) -> Self {
        Self { provider, settings }
    }

    /// Get the synthesis settings.
    #[must_use]
    pub const fn settings(&self) -> &SynthesisSettings {
        &self.settings
    }

    /// Get the fixed output path.
    #[must_use]
    pub fn output_path(&self) -> &Path {
        &self.settings.output_path
    }

    /// Build the voice payload for `text`.
    #[must_use]
    pub fn request_for(&self, text: &str) -> SpeechRequest {
        SpeechRequest::new(text, self.settings.voice_id.as_str())
            .model(self.settings.model_id.as_str())
            .voice_settings(self.settings.voice_settings)
    }

    /// Synthesize `text` and write the audio to the output path.
    ///
    /// Returns the output path on success. Any prior file at that path is
    /// replaced.
    ///
    /// # Errors
    ///
    /// Returns the provider error (which carries the HTTP status and body for
    /// a rejected request) or an I/O error if the file cannot be written.
    /// Nothing is written on a provider error.
    pub async fn synthesize(&self, text: &str) -> Result<PathBuf> {
        let request = self.request_for(text);
        debug!(
            provider = self.provider.provider_name(),
            voice_id = %request.voice_id,
            model_id = %request.model_id,
            chars = text.chars().count(),
            "requesting speech"
        );

        let response = self
            .provider
            .speech_to_file(&request, &self.settings.output_path)
            .await
            .inspect_err(|e| {
                warn!(
                    provider = self.provider.provider_name(),
                    error = %e,
                    "speech synthesis failed"
                );
            })?;

        info!(
            path = %self.settings.output_path.display(),
            bytes = response.audio.len(),
            "audio saved"
        );
        Ok(self.settings.output_path.clone())
    }
}
