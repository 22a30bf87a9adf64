//! Audio types and the text-to-speech provider trait.
//!
//! This module provides the voice payload sent to a speech service and the
//! audio returned from it:
//! - [`SpeechRequest`] / [`VoiceSettings`]: what to say and how
//! - [`SpeechResponse`]: raw audio bytes plus their format
//! - [`TextToSpeechProvider`]: the trait speech backends implement
//!
//! # Example
//!
//! ```rust,ignore
//! use kuku::prelude::*;
//!
//! let request = SpeechRequest::new("Hello there.", "EXAVITQu4vr4xnSDxMaL")
//!     .model("eleven_monolingual_v1")
//!     .voice_settings(VoiceSettings::new(0.5, 0.75));
//! let response = provider.speech(&request).await?;
//! response.save("ai_audio.mp3")?;
//! ```

use std::path::Path;

use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Audio container returned by a speech provider. Only MP3 is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    /// MP3 format
    #[default]
    Mp3,
}

impl AudioFormat {
    /// Get the MIME type for this format, sent as `Accept`.
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
        }
    }
}

/// Voice-quality tuning sent with each synthesis request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    /// Voice consistency (0.0 to 1.0).
    pub stability: f32,
    /// Similarity to the reference voice (0.0 to 1.0).
    pub similarity_boost: f32,
}

impl VoiceSettings {
    /// Default stability.
    pub const DEFAULT_STABILITY: f32 = 0.5;
    /// Default similarity boost.
    pub const DEFAULT_SIMILARITY_BOOST: f32 = 0.75;

    /// Create voice settings.
    #[must_use]
    pub const fn new(stability: f32, similarity_boost: f32) -> Self {
        Self {
            stability,
            similarity_boost,
        }
    }
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STABILITY, Self::DEFAULT_SIMILARITY_BOOST)
    }
}

/// Request for generating speech from text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechRequest {
    /// Text to vocalize.
    pub text: String,
    /// Voice identity to use.
    pub voice_id: String,
    /// Synthesis model identifier.
    pub model_id: String,
    /// Voice-quality parameters.
    pub voice_settings: VoiceSettings,
    /// Expected output format.
    #[serde(skip)]
    pub format: AudioFormat,
}

impl SpeechRequest {
    /// Default synthesis model.
    pub const DEFAULT_MODEL: &'static str = "eleven_monolingual_v1";

    /// Create a new speech request with default model and settings.
    #[must_use]
    pub fn new(text: impl Into<String>, voice_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice_id: voice_id.into(),
            model_id: Self::DEFAULT_MODEL.to_owned(),
            voice_settings: VoiceSettings::default(),
            format: AudioFormat::Mp3,
        }
    }

    /// Set the synthesis model.
    #[must_use]
    pub fn model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    /// Set the voice settings.
    #[must_use]
    pub const fn voice_settings(mut self, settings: VoiceSettings) -> Self {
        self.voice_settings = settings;
        self
    }
}

/// Response from a speech synthesis request.
#[derive(Debug, Clone)]
pub struct SpeechResponse {
    /// The generated audio data.
    pub audio: Bytes,
    /// The format of the audio data.
    pub format: AudioFormat,
}

impl SpeechResponse {
    /// Create a new speech response.
    #[must_use]
    pub fn new(audio: impl Into<Bytes>, format: AudioFormat) -> Self {
        Self {
            audio: audio.into(),
            format,
        }
    }

    /// Write the audio to `path`, replacing whatever was there.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub async fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        tokio::fs::write(path, &self.audio).await
    }
}

/// Trait for providers that support text-to-speech synthesis.
#[async_trait]
pub trait TextToSpeechProvider: Send + Sync {
    /// Generate speech from text.
    async fn speech(&self, request: &SpeechRequest) -> Result<SpeechResponse>;

    /// Generate speech and save it to `path`.
    ///
    /// Nothing is written when synthesis fails.
    async fn speech_to_file(
        &self,
        request: &SpeechRequest,
        path: &Path,
    ) -> Result<SpeechResponse> {
        let response = self.speech(request).await?;
        response.save(path).await?;
        Ok(response)
    }

    /// Get the name of this provider.
    fn provider_name(&self) -> &'static str;
}

#[async_trait]
impl<T: TextToSpeechProvider + ?Sized> TextToSpeechProvider for std::sync::Arc<T> {
    async fn speech(&self, request: &SpeechRequest) -> Result<SpeechResponse> {
        (**self).speech(request).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }
}

/// Type alias for an Arc-wrapped [`TextToSpeechProvider`].
pub type SharedSpeechProvider = std::sync::Arc<dyn TextToSpeechProvider>;
