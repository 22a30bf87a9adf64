//! Prompt construction for the script generator.

/// Upper bound on script length requested from the model.
pub const MAX_SCRIPT_WORDS: usize = 100;

/// Build the single-turn prompt asking for a short voice-note script.
///
/// `mood` and `topic` are embedded verbatim. No validation is done; an empty
/// topic still yields a complete prompt.
#[must_use]
pub fn script_prompt(mood: &str, topic: &str) -> String {
    format!(
        "Create a short, engaging, and emotional audio script under {MAX_SCRIPT_WORDS} words in a {mood} tone\n\
         on the topic \"{topic}\". This is for a daily voice note experience in an audio streaming app.\n\
         It should feel warm, human, and encouraging."
    )
}
