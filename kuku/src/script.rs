//! Stage one: write the voice-note script.

use tracing::{debug, info};

use crate::error::Result;
use crate::generate::TextGenerator;
use crate::prompt::script_prompt;

/// Generates short mood-based scripts through a [`TextGenerator`].
#[derive(Debug, Clone)]
pub struct ScriptGenerator<G> {
    generator: G,
}

impl<G: TextGenerator> ScriptGenerator<G> {
    /// Wrap a text generator.
    #[must_use]
    pub const fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Get the underlying generator.
    #[must_use]
    pub const fn generator(&self) -> &G {
        &self.generator
    }

    /// Write a script for `mood` and `topic`.
    ///
    /// The model output is returned with leading and trailing whitespace
    /// removed. Nothing else about length or tone is enforced.
    ///
    /// # Errors
    ///
    /// Returns the provider's error on transport failure, non-success status
    /// or a malformed response.
    pub async fn generate_script(&self, mood: &str, topic: &str) -> Result<String> {
        let prompt = script_prompt(mood, topic);
        debug!(
            provider = self.generator.provider_name(),
            prompt_len = prompt.len(),
            "requesting script"
        );

        let text = self.generator.generate(&prompt).await?;
        let script = text.trim().to_owned();

        info!(
            provider = self.generator.provider_name(),
            words = script.split_whitespace().count(),
            "script generated"
        );
        Ok(script)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{ApiError, Error};
    use crate::providers::mock::MockGenerator;

    #[tokio::test]
    async fn trims_model_output() {
        let generator = ScriptGenerator::new(MockGenerator::new(["  Hello world.  "]));
        let script = generator.generate_script("calm", "sleep").await.unwrap();
        assert_eq!(script, "Hello world.");
    }

    #[tokio::test]
    async fn sends_prompt_with_mood_and_topic() {
        let mock = MockGenerator::new(["ok"]);
        let generator = ScriptGenerator::new(mock);
        generator.generate_script("learning", "black holes").await.unwrap();

        let prompts = generator.generator().prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("learning"));
        assert!(prompts[0].contains("black holes"));
    }

    #[tokio::test]
    async fn empty_topic_still_calls_model() {
        let generator = ScriptGenerator::new(MockGenerator::new(["\n\tA quiet thought.\n"]));
        let script = generator.generate_script("calm", "").await.unwrap();
        assert_eq!(script, "A quiet thought.");
    }

    #[tokio::test]
    async fn propagates_provider_error() {
        let mock = MockGenerator::failing(ApiError::auth("mock", "bad key"));
        let generator = ScriptGenerator::new(mock);
        let err = generator.generate_script("calm", "sleep").await.unwrap_err();
        assert!(matches!(err, Error::Api(ref e) if e.message == "bad key"));
    }
}
