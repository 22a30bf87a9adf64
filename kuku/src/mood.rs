//! Moods and the per-click generation request.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Emotional tone of the requested script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// Upbeat, pushing the listener forward.
    #[default]
    Motivation,
    /// Slow and soothing.
    Calm,
    /// Curious, explaining something.
    Learning,
}

impl Mood {
    /// Every supported mood, in selector order.
    pub const ALL: [Self; 3] = [Self::Motivation, Self::Calm, Self::Learning];

    /// Name used in prompts and on the command line.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Motivation => "motivation",
            Self::Calm => "calm",
            Self::Learning => "learning",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mood| mood.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidMood(s.to_owned()))
    }
}

/// A single user action: which mood, which topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Tone of the script.
    pub mood: Mood,
    /// Free-text topic. Not validated; may be empty.
    pub topic: String,
}

impl GenerationRequest {
    /// Create a new generation request.
    #[must_use]
    pub fn new(mood: Mood, topic: impl Into<String>) -> Self {
        Self {
            mood,
            topic: topic.into(),
        }
    }
}
