//! ElevenLabs client configuration.

use crate::error::{ApiError, Result};

/// Configuration for the ElevenLabs client.
#[derive(Debug, Clone)]
pub struct ElevenLabsConfig {
    /// API key sent as `xi-api-key`.
    pub api_key: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

impl ElevenLabsConfig {
    /// Default ElevenLabs API base URL.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.elevenlabs.io/v1";
    /// Default request timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

    /// Creates a new configuration with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Creates configuration from environment variables.
    ///
    /// Reads from:
    /// - `ELEVENLABS_API_KEY` - Required API key
    /// - `ELEVENLABS_BASE_URL` - Optional base URL
    ///
    /// # Errors
    ///
    /// Returns an auth error if `ELEVENLABS_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(|name| std::env::var(name).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns an auth error if `ELEVENLABS_API_KEY` is missing or blank.
    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = var("ELEVENLABS_API_KEY").ok_or_else(|| {
            ApiError::auth("elevenlabs", "ELEVENLABS_API_KEY environment variable not set")
        })?;

        let base_url =
            var("ELEVENLABS_BASE_URL").unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_owned());

        Ok(Self {
            api_key,
            base_url,
            timeout_secs: Some(Self::DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout. `0` disables it.
    #[must_use]
    pub const fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = if secs == 0 { None } else { Some(secs) };
        self
    }
}

impl Default for ElevenLabsConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: Self::DEFAULT_BASE_URL.to_owned(),
            timeout_secs: Some(Self::DEFAULT_TIMEOUT_SECS),
        }
    }
}
