//! Wire structures shared by every provider
//!
//! All providers receive the same request body. Responses come in one of two
//! shapes, selected by [`ResponseShape`](super::ResponseShape).

use serde::{Deserialize, Serialize};

/// A single `{role, content}` entry of the request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireMessage {
    pub role: String,
    pub content: String,
}

/// JSON body posted to the provider's chat endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequestBody {
    pub model: String,
    pub messages: Vec<WireMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
}

/// OpenAI-compatible chat completion response (only the fields read here).
#[derive(Debug, Deserialize)]
pub(super) struct ChoicesResponse {
    #[serde(default)]
    pub choices: Option<Vec<Choice>>,
}

#[derive(Debug, Deserialize)]
pub(super) struct Choice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Anthropic Messages API response (only the fields read here).
#[derive(Debug, Deserialize)]
pub(super) struct ContentBlocksResponse {
    #[serde(default)]
    pub content: Option<Vec<ContentBlock>>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ContentBlock {
    #[serde(default)]
    pub text: Option<String>,
}
