//! Kuku - mood-based AI voice notes
//!
//! This crate chains two remote services into one pipeline:
//! a generative-text model writes a short script for a mood and topic,
//! and a text-to-speech service turns that script into an MP3 file.
//!
//! - [`script::ScriptGenerator`] builds the prompt and trims the model output
//! - [`synth::SpeechSynthesizer`] sends the fixed voice payload and saves the audio
//! - [`pipeline::Pipeline`] runs both stages and reports through [`hooks`]

pub mod audio;
pub mod error;
pub mod generate;
pub mod hooks;
pub mod mood;
pub mod pipeline;
pub mod prelude;
pub mod prompt;
pub mod providers;
pub mod script;
pub mod synth;

pub use error::{ApiError, Error, Result};
