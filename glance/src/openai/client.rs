//! OpenAI API client.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::content::ContentBlock;
use crate::error::{Error, Result};

use super::config::OpenAIConfig;
use super::types::{CompletionRequest, RequestMessage};

/// OpenAI API client.
///
/// Holds only the immutable configuration and a connection pool; every call
/// builds its own request and returns its own outcome.
#[derive(Debug, Clone)]
pub struct OpenAI {
    pub(crate) config: Arc<OpenAIConfig>,
    pub(crate) client: Client,
}

impl OpenAI {
    /// Create a new OpenAI client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the API key is empty or the timeout or
    /// token bound is zero, or [`Error::Transport`] if the HTTP client cannot
    /// be built.
    pub fn new(config: OpenAIConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(Error::config("API key is required"));
        }
        if config.timeout_secs == Some(0) {
            return Err(Error::config("timeout must be at least 1 second"));
        }
        if config.max_tokens == 0 {
            return Err(Error::config("max tokens must be at least 1"));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        let client = builder
            .build()
            .map_err(|e| Error::transport(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            config: Arc::new(config),
            client,
        })
    }

    /// Create a client from environment variables.
    ///
    /// # Errors
    ///
    /// See [`OpenAIConfig::from_env`] and [`OpenAI::new`].
    pub fn from_env() -> Result<Self> {
        Self::new(OpenAIConfig::from_env()?)
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &OpenAIConfig {
        &self.config
    }

    /// Get the model.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Build the request body for one user turn.
    #[must_use]
    pub fn build_request(&self, blocks: &[ContentBlock]) -> CompletionRequest {
        let detail = self.config.image_detail;
        let content = blocks.iter().map(|block| block.to_part(detail)).collect();

        CompletionRequest {
            model: self.config.model.clone(),
            messages: vec![RequestMessage {
                role: "user",
                content,
            }],
            max_tokens: self.config.max_tokens,
        }
    }

    /// Attach the bearer credential and JSON headers.
    pub(crate) fn authorized_post(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .post(url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
    }
}
