//! ElevenLabs API client implementation.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::audio::{SpeechRequest, SpeechResponse, TextToSpeechProvider, VoiceSettings};
use crate::error::{ApiError, Result};
use crate::providers::error_body;

use super::config::ElevenLabsConfig;

const PROVIDER: &str = "elevenlabs";

/// ElevenLabs text-to-speech request body.
#[derive(Debug, Clone, Serialize)]
struct ElevenLabsSpeechRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

/// ElevenLabs API client.
#[derive(Debug, Clone)]
pub struct ElevenLabs {
    pub(crate) config: Arc<ElevenLabsConfig>,
    pub(crate) client: Client,
}

impl ElevenLabs {
    /// Create a new ElevenLabs client with the given configuration.
    ///
    /// # Errors
    ///
    /// Fails if the API key is empty or the HTTP client cannot be built.
    pub fn new(config: ElevenLabsConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(ApiError::auth(PROVIDER, "API key is required").into());
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        let client = builder
            .build()
            .map_err(|e| ApiError::internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            config: Arc::new(config),
            client,
        })
    }

    /// Create a client from environment variables.
    ///
    /// # Errors
    ///
    /// Fails if `ELEVENLABS_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        Self::new(ElevenLabsConfig::from_env()?)
    }

    /// Build the text-to-speech URL for a voice.
    pub(crate) fn speech_url(&self, voice_id: &str) -> String {
        format!(
            "{}/text-to-speech/{voice_id}",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl TextToSpeechProvider for ElevenLabs {
    async fn speech(&self, request: &SpeechRequest) -> Result<SpeechResponse> {
        let url = self.speech_url(&request.voice_id);
        let body = ElevenLabsSpeechRequest {
            text: &request.text,
            model_id: &request.model_id,
            voice_settings: request.voice_settings,
        };
        debug!(voice_id = %request.voice_id, "sending text-to-speech request");

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", &self.config.api_key)
            .header("Accept", request.format.mime_type())
            .json(&body)
            .send()
            .await
            .map_err(ApiError::from)?;

        // Only 200 carries audio; everything else is reported verbatim.
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let error_text = error_body(response).await;
            return Err(ApiError::http_status(status.as_u16(), error_text)
                .with_provider(PROVIDER)
                .into());
        }

        let audio = response.bytes().await.map_err(ApiError::from)?;

        Ok(SpeechResponse::new(audio, request.format))
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{ApiErrorKind, Error};

    #[test]
    fn rejects_empty_key() {
        let err = ElevenLabs::new(ElevenLabsConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Api(ref e) if e.kind == ApiErrorKind::Auth));
    }

    #[test]
    fn builds_speech_url() {
        let client = ElevenLabs::new(ElevenLabsConfig::new("xi")).unwrap();
        assert_eq!(
            client.speech_url("EXAVITQu4vr4xnSDxMaL"),
            "https://api.elevenlabs.io/v1/text-to-speech/EXAVITQu4vr4xnSDxMaL"
        );
    }

    #[test]
    fn body_matches_wire_format() {
        let request = SpeechRequest::new("Hello", "voice");
        let body = ElevenLabsSpeechRequest {
            text: &request.text,
            model_id: &request.model_id,
            voice_settings: request.voice_settings,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "text": "Hello",
                "model_id": "eleven_monolingual_v1",
                "voice_settings": { "stability": 0.5, "similarity_boost": 0.75 }
            })
        );
    }
}
