//! Console presentation of pipeline progress.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::Path;

use async_trait::async_trait;
use kuku::hooks::{PipelineHooks, Stage};
use kuku::mood::GenerationRequest;
use kuku::Error;

/// Prints each pipeline event for a human at a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleHooks;

/// The line shown when a stage fails.
#[must_use]
pub fn failure_line(stage: Stage, error: &Error) -> String {
    let what = match stage {
        Stage::Script => "Script generation failed.",
        Stage::Synthesis => "Audio generation failed.",
    };
    format!("{what} {}", user_message(error))
}

/// Error text without the provider tag.
fn user_message(error: &Error) -> String {
    error
        .as_api()
        .map_or_else(|| error.to_string(), |api| api.message.clone())
}

#[async_trait]
impl PipelineHooks for ConsoleHooks {
    async fn on_script_start(&self, request: &GenerationRequest) {
        println!(
            "Crafting your personalized voice note ({}, \"{}\")...",
            request.mood, request.topic
        );
    }

    async fn on_script_ready(&self, script: &str) {
        println!();
        println!("Script generated:");
        println!();
        for line in script.lines() {
            println!("  {line}");
        }
        println!();
    }

    async fn on_synthesis_start(&self, _script: &str) {
        println!("Generating voice with ElevenLabs...");
    }

    async fn on_audio_ready(&self, path: &Path) {
        println!("Audio saved to {}", path.display());
    }

    async fn on_error(&self, stage: Stage, error: &Error) {
        eprintln!("{}", failure_line(stage, error));
    }
}
