//! Unified error types for the kuku pipeline.
//!
//! This module provides the error hierarchy covering:
//! - Remote API errors from the text and speech services
//! - Input errors (unknown mood, empty script)
//! - Local I/O errors while persisting audio

use std::fmt;

/// Result type alias for kuku operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for kuku.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Remote API error (text generation or speech synthesis).
    #[error("{0}")]
    Api(#[from] ApiError),

    /// Mood name outside the supported set.
    #[error("Unknown mood '{0}' (expected one of: motivation, calm, learning)")]
    InvalidMood(String),

    /// The generated script was empty after trimming.
    #[error("Generated script is empty")]
    EmptyScript,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns the underlying API error, if any.
    #[must_use]
    pub const fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}

/// Error type for remote service calls.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ApiError {
    /// The error kind.
    pub kind: ApiErrorKind,
    /// The provider name (e.g., "gemini", "elevenlabs").
    pub provider: Option<String>,
    /// Additional error message.
    pub message: String,
    /// Optional error code from the provider.
    pub code: Option<String>,
}

/// Categories of API errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ApiErrorKind {
    /// Authentication or authorization failure.
    Auth,
    /// Rate limit or quota exceeded.
    RateLimited,
    /// Response body did not have the expected shape.
    ResponseFormat,
    /// Network or connection error.
    Network,
    /// Non-success HTTP status.
    HttpStatus,
    /// Provider-specific error.
    Provider,
    /// Internal error.
    Internal,
}

impl ApiError {
    /// Create an authentication error.
    #[must_use]
    pub fn auth(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Auth,
            provider: Some(provider.into()),
            message: message.into(),
            code: None,
        }
    }

    /// Create a rate limit error.
    #[must_use]
    pub fn rate_limited(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::RateLimited,
            provider: Some(provider.into()),
            message: message.into(),
            code: Some("429".to_owned()),
        }
    }

    /// Create a response format error.
    #[must_use]
    pub fn response_format(expected: impl Into<String>, got: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::ResponseFormat,
            provider: None,
            message: format!("Expected {}, got {}", expected.into(), got.into()),
            code: None,
        }
    }

    /// Create a network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            provider: None,
            message: message.into(),
            code: None,
        }
    }

    /// Create an HTTP status error.
    ///
    /// The message keeps the raw body so callers can show it verbatim.
    #[must_use]
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::HttpStatus,
            provider: None,
            message: format!("HTTP {status}: {}", body.into()),
            code: Some(status.to_string()),
        }
    }

    /// Create a provider error with an error code.
    #[must_use]
    pub fn provider_code(
        provider: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind: ApiErrorKind::Provider,
            provider: Some(provider.into()),
            message: message.into(),
            code: Some(code.into()),
        }
    }

    /// Create an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Internal,
            provider: None,
            message: message.into(),
            code: None,
        }
    }

    /// Attach a provider name.
    #[must_use]
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    /// HTTP status code carried by this error, when the code is numeric.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.code.as_deref().and_then(|c| c.parse().ok())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(provider) = &self.provider {
            write!(f, "[{provider}] ")?;
        }
        write!(f, "{}", self.message)?;
        if self.kind != ApiErrorKind::HttpStatus
            && let Some(code) = &self.code
        {
            write!(f, " (code: {code})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::network("Request timed out")
        } else if err.is_connect() {
            Self::network(format!("Connection failed: {err}"))
        } else {
            Self::network(err.to_string())
        }
    }
}
