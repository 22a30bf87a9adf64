//! Gemini wire types.

use serde::{Deserialize, Serialize};

/// `generateContent` request body.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest<'a> {
    pub contents: Vec<GeminiContent<'a>>,
}

impl<'a> GenerateContentRequest<'a> {
    /// A single user turn holding `prompt`.
    pub fn single_turn(prompt: &'a str) -> Self {
        Self {
            contents: vec![GeminiContent {
                role: "user",
                parts: vec![GeminiPart { text: prompt }],
            }],
        }
    }
}

/// One conversation turn.
#[derive(Debug, Clone, Serialize)]
pub struct GeminiContent<'a> {
    pub role: &'a str,
    pub parts: Vec<GeminiPart<'a>>,
}

/// Text part of a request turn.
#[derive(Debug, Clone, Serialize)]
pub struct GeminiPart<'a> {
    pub text: &'a str,
}

/// `generateContent` response body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

/// A completion candidate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiCandidate {
    #[serde(default)]
    pub content: Option<GeminiResponseContent>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Content block within a candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiResponseContent {
    #[serde(default)]
    pub parts: Vec<GeminiResponsePart>,
}

/// A response part. Non-text parts deserialize with `text: None`.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

/// Why a prompt was blocked, if it was.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// Google API error envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiErrorResponse {
    pub error: GeminiError,
}

/// Google API error details.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiError {
    #[serde(default)]
    pub code: Option<u16>,
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}
