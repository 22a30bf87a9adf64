//! ElevenLabs text-to-speech client.

mod client;
mod config;

pub use client::ElevenLabs;
pub use config::ElevenLabsConfig;
