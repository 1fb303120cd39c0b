//! OpenAI Chat Completions client.
//!
//! Serializes a normalized content list into a single-user-turn request,
//! posts it once, and classifies the response.

mod client;
mod completion;
mod config;
mod types;

pub use client::OpenAI;
pub use config::OpenAIConfig;
pub use types::{Choice, CompletionRequest, CompletionResponse, RequestMessage, ResponseMessage};
