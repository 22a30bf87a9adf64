//! Google Gemini client implementation.
//!
//! Supports single-turn text generation through the `generateContent`
//! endpoint.

mod client;
mod config;
mod types;

pub use client::Gemini;
pub use config::GeminiConfig;
