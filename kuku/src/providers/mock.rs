//! Mock providers for testing.
//!
//! These return predefined responses without making real API calls, and
//! record what they were asked so tests can inspect the traffic.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::audio::{SpeechRequest, SpeechResponse, TextToSpeechProvider};
use crate::error::{ApiError, Result};
use crate::generate::TextGenerator;

/// A mock text generator.
///
/// Returns predefined responses in sequence, cycling through them.
///
/// # Example
///
/// ```rust,ignore
/// use kuku::providers::mock::MockGenerator;
///
/// let generator = MockGenerator::new(["Hello!", "Goodbye!"]);
/// // First call returns "Hello!", second returns "Goodbye!", third returns "Hello!" again...
/// ```
#[derive(Debug, Default)]
pub struct MockGenerator {
    responses: Vec<String>,
    failure: Option<ApiError>,
    response_index: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl MockGenerator {
    /// Create a mock generator with predefined responses.
    #[must_use]
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: responses.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Create a mock generator that fails every call with `error`.
    #[must_use]
    pub fn failing(error: ApiError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    /// Prompts received so far, oldest first.
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(prompt.to_owned());

        if let Some(err) = &self.failure {
            return Err(err.clone().into());
        }

        let index = self.response_index.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .responses
            .get(index % self.responses.len().max(1))
            .cloned()
            .unwrap_or_default())
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// A mock speech provider.
///
/// Returns predefined audio payloads in sequence, cycling through them.
#[derive(Debug, Default)]
pub struct MockSpeech {
    payloads: Vec<Vec<u8>>,
    failure: Option<ApiError>,
    payload_index: AtomicUsize,
    requests: Mutex<Vec<SpeechRequest>>,
}

impl MockSpeech {
    /// Create a mock speech provider with predefined audio payloads.
    #[must_use]
    pub fn new(payloads: impl IntoIterator<Item = Vec<u8>>) -> Self {
        Self {
            payloads: payloads.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Create a mock speech provider that fails every call with `error`.
    #[must_use]
    pub fn failing(error: ApiError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    /// Requests received so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<SpeechRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl TextToSpeechProvider for MockSpeech {
    async fn speech(&self, request: &SpeechRequest) -> Result<SpeechResponse> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());

        if let Some(err) = &self.failure {
            return Err(err.clone().into());
        }

        let index = self.payload_index.fetch_add(1, Ordering::SeqCst);
        let audio = self
            .payloads
            .get(index % self.payloads.len().max(1))
            .cloned()
            .unwrap_or_default();
        Ok(SpeechResponse::new(audio, request.format))
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}
