//! Gemini client configuration.

use crate::error::{ApiError, Result};

/// Configuration for the Gemini client.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for authentication.
    pub api_key: String,
    /// Base URL for the API (defaults to Google's Generative Language API).
    pub base_url: String,
    /// Model to use.
    pub model: String,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

impl GeminiConfig {
    /// Default Gemini API base URL.
    pub const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com/v1beta";
    /// Default model.
    pub const DEFAULT_MODEL: &'static str = "gemini-2.0-flash";
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
    /// - `GOOGLE_API_KEY` - Required API key
    /// - `GEMINI_BASE_URL` - Optional base URL
    /// - `GEMINI_MODEL` - Optional model
    ///
    /// # Errors
    ///
    /// Returns an auth error if `GOOGLE_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(|name| std::env::var(name).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    ///
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns an auth error if `GOOGLE_API_KEY` is missing or blank.
    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = var("GOOGLE_API_KEY").ok_or_else(|| {
            ApiError::auth("gemini", "GOOGLE_API_KEY environment variable not set")
        })?;

        let base_url = var("GEMINI_BASE_URL").unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_owned());

        let model = var("GEMINI_MODEL").unwrap_or_else(|| Self::DEFAULT_MODEL.to_owned());

        Ok(Self {
            api_key,
            base_url,
            model,
            timeout_secs: Some(Self::DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the model.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the request timeout. `0` disables it.
    #[must_use]
    pub const fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = if secs == 0 { None } else { Some(secs) };
        self
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: Self::DEFAULT_BASE_URL.to_owned(),
            model: Self::DEFAULT_MODEL.to_owned(),
            timeout_secs: Some(Self::DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::error::{ApiErrorKind, Error};

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn from_env_requires_the_api_key() {
        let err =
            GeminiConfig::from_env_with(env(&[("GEMINI_MODEL", "gemini-1.5-pro")])).unwrap_err();
        assert!(matches!(&err, Error::Api(api) if api.kind == ApiErrorKind::Auth));
        assert!(err.to_string().contains("GOOGLE_API_KEY"));

        let blank = GeminiConfig::from_env_with(env(&[("GOOGLE_API_KEY", "  ")]));
        assert!(blank.is_err());
    }

    #[test]
    fn from_env_falls_back_to_defaults() {
        let config = GeminiConfig::from_env_with(env(&[
            ("GOOGLE_API_KEY", "g-key"),
            ("GEMINI_MODEL", ""),
        ]))
        .unwrap();

        assert_eq!(config.api_key, "g-key");
        assert_eq!(config.model, GeminiConfig::DEFAULT_MODEL);
        assert_eq!(config.base_url, GeminiConfig::DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, Some(GeminiConfig::DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn from_env_applies_overrides() {
        let config = GeminiConfig::from_env_with(env(&[
            ("GOOGLE_API_KEY", "g-key"),
            ("GEMINI_BASE_URL", "http://localhost:9000"),
            ("GEMINI_MODEL", "gemini-1.5-pro"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.model, "gemini-1.5-pro");
    }

    #[test]
    fn test_config_new() {
        let config = GeminiConfig::new("test-key");
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, GeminiConfig::DEFAULT_BASE_URL);
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.timeout_secs, Some(120));
    }

    #[test]
    fn test_config_builder() {
        let config = GeminiConfig::new("key")
            .with_model("gemini-1.5-pro")
            .with_base_url("http://localhost:9000")
            .with_timeout(0);

        assert_eq!(config.model, "gemini-1.5-pro");
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout_secs, None);
    }
}
