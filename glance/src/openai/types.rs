//! OpenAI Chat Completions request and response types.
//!
//! These map directly onto the wire format. Only the fields glance sends or
//! reads are modelled; everything else in a response is ignored.

use serde::{Deserialize, Serialize};

use crate::content::ContentPart;

/// Chat completion request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionRequest {
    /// Model identifier.
    pub model: String,
    /// Always a single user message.
    pub messages: Vec<RequestMessage>,
    /// Upper bound on output tokens.
    pub max_tokens: u32,
}

/// Message inside a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestMessage {
    /// Always `"user"`.
    pub role: &'static str,
    /// Ordered content parts.
    pub content: Vec<ContentPart>,
}

/// Chat completion response body.
///
/// Every level is optional so that a 200 with an unexpected shape is reported
/// as a malformed response instead of a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompletionResponse {
    /// Response choices.
    #[serde(default)]
    pub choices: Option<Vec<Choice>>,
    /// Model that served the request.
    #[serde(default)]
    pub model: Option<String>,
}

/// Response choice.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Choice {
    /// Generated message.
    #[serde(default)]
    pub message: Option<ResponseMessage>,
    /// Why generation stopped.
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Response message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseMessage {
    /// Reply text.
    #[serde(default)]
    pub content: Option<String>,
    /// Refusal message if the model declined to respond.
    #[serde(default)]
    pub refusal: Option<String>,
}
