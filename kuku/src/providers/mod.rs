//! Remote service backends.
//!
//! # Available Backends
//!
//! - [`gemini`] - Google Gemini text generation
//! - [`elevenlabs`] - ElevenLabs text-to-speech
//! - [`mock`] - In-process fakes for tests

#[cfg(feature = "gemini")]
pub mod gemini;

#[cfg(feature = "elevenlabs")]
pub mod elevenlabs;

pub mod mock;

#[cfg(feature = "gemini")]
pub use gemini::{Gemini, GeminiConfig};

#[cfg(feature = "elevenlabs")]
pub use elevenlabs::{ElevenLabs, ElevenLabsConfig};

/// Body of an error response, or a note saying why it could not be read.
#[cfg(any(feature = "gemini", feature = "elevenlabs"))]
pub(crate) async fn error_body(response: reqwest::Response) -> String {
    response
        .text()
        .await
        .unwrap_or_else(|e| format!("<failed to read response body: {e}>"))
}
