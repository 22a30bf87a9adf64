//! Gemini API client implementation.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::generate::TextGenerator;
use crate::providers::error_body;

use super::config::GeminiConfig;
use super::types::{GeminiErrorResponse, GenerateContentRequest, GenerateContentResponse};

const PROVIDER: &str = "gemini";

/// Gemini API client.
#[derive(Debug, Clone)]
pub struct Gemini {
    pub(crate) config: Arc<GeminiConfig>,
    pub(crate) client: Client,
}

impl Gemini {
    /// Create a new Gemini client with the given configuration.
    ///
    /// # Errors
    ///
    /// Fails if the API key is empty or the HTTP client cannot be built.
    pub fn new(config: GeminiConfig) -> Result<Self> {
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
    /// Fails if `GOOGLE_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        Self::new(GeminiConfig::from_env()?)
    }

    /// Build the `generateContent` URL for the configured model.
    pub(crate) fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Parse an error response from Gemini.
    pub(crate) fn parse_error(status: u16, body: &str) -> ApiError {
        if let Ok(error_response) = serde_json::from_str::<GeminiErrorResponse>(body) {
            let error = error_response.error;

            return match status {
                401 | 403 => ApiError::auth(PROVIDER, error.message),
                429 => ApiError::rate_limited(PROVIDER, error.message),
                _ => ApiError::provider_code(
                    PROVIDER,
                    error
                        .status
                        .unwrap_or_else(|| error.code.unwrap_or(status).to_string()),
                    error.message,
                ),
            };
        }

        ApiError::http_status(status, body).with_provider(PROVIDER)
    }

    /// Collect the text of the first candidate.
    pub(crate) fn parse_response(response: GenerateContentResponse) -> Result<String> {
        let block_reason = response
            .prompt_feedback
            .and_then(|feedback| feedback.block_reason);

        let Some(candidate) = response.candidates.into_iter().next() else {
            let got = block_reason.map_or_else(
                || "no candidates".to_owned(),
                |reason| format!("prompt blocked ({reason})"),
            );
            return Err(ApiError::response_format("at least one candidate", got)
                .with_provider(PROVIDER)
                .into());
        };

        let text: String = candidate
            .content
            .into_iter()
            .flat_map(|content| content.parts)
            .filter_map(|part| part.text)
            .collect();

        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for Gemini {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = self.generate_url();
        let body = GenerateContentRequest::single_turn(prompt);
        debug!(model = %self.config.model, "sending generateContent request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = error_body(response).await;
            return Err(Self::parse_error(status.as_u16(), &error_text).into());
        }

        let response_text = response.text().await.map_err(ApiError::from)?;
        let parsed: GenerateContentResponse =
            serde_json::from_str(&response_text).map_err(|e| {
                ApiError::response_format(
                    "valid Gemini response",
                    format!("parse error: {e}, response: {response_text}"),
                )
                .with_provider(PROVIDER)
            })?;

        Self::parse_response(parsed)
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}
