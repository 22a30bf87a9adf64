//! Text generation provider trait.
//!
//! [`TextGenerator`] is the seam between the script generator and whatever
//! remote model writes the text. The Gemini client implements it, and tests
//! substitute [`MockGenerator`](crate::providers::mock::MockGenerator).

use async_trait::async_trait;

use crate::error::Result;

/// Trait for providers that turn a single prompt into text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Submit `prompt` as a single user turn and return the raw model text.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Get the name of this provider.
    ///
    /// Used for error messages and logging.
    fn provider_name(&self) -> &'static str;
}

/// Type alias for an Arc-wrapped [`TextGenerator`].
pub type SharedTextGenerator = std::sync::Arc<dyn TextGenerator>;

#[async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for std::sync::Arc<T> {
    async fn generate(&self, prompt: &str) -> Result<String> {
        (**self).generate(prompt).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }
}
