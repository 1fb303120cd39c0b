//! OpenAI client configuration.

use std::str::FromStr;

use crate::content::ImageDetail;
use crate::error::{Error, Result};

/// Configuration for the OpenAI client.
///
/// Read-only once the client is built, so one value can back any number of
/// independent requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAIConfig {
    /// API key sent as the bearer credential.
    pub api_key: String,
    /// Base URL for the API (defaults to OpenAI's API).
    pub base_url: String,
    /// Model identifier.
    pub model: String,
    /// Upper bound on output tokens.
    pub max_tokens: u32,
    /// Request timeout in seconds. `None` waits indefinitely.
    pub timeout_secs: Option<u64>,
    /// Detail level attached to every image part.
    pub image_detail: Option<ImageDetail>,
}

impl OpenAIConfig {
    /// Default OpenAI API base URL.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openai.com/v1";
    /// Default model.
    pub const DEFAULT_MODEL: &'static str = "gpt-4o";
    /// Default output token bound.
    pub const DEFAULT_MAX_TOKENS: u32 = 300;

    /// Creates a new configuration with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Creates configuration from environment variables.
    ///
    /// Reads from:
    /// - `OPENAI_API_KEY` - Required API key
    /// - `OPENAI_BASE_URL` - Optional base URL
    /// - `OPENAI_MODEL` - Optional model
    /// - `OPENAI_MAX_TOKENS` - Optional output token bound
    /// - `OPENAI_TIMEOUT_SECS` - Optional request timeout
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the API key is missing or empty, or if a
    /// numeric variable does not parse.
    pub fn from_env() -> Result<Self> {
        Self::new(Self::api_key_from_env()?).with_env_overrides()
    }

    /// Read the API key from `OPENAI_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the variable is unset or blank.
    pub fn api_key_from_env() -> Result<String> {
        std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::config("OPENAI_API_KEY environment variable not set"))
    }

    /// Override settings with whichever optional environment variables are set.
    ///
    /// The API key is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a numeric variable does not parse.
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(base_url) = std::env::var("OPENAI_BASE_URL") {
            self.base_url = base_url;
        }
        if let Ok(model) = std::env::var("OPENAI_MODEL") {
            self.model = model;
        }
        if let Some(max_tokens) = env_number("OPENAI_MAX_TOKENS")? {
            self.max_tokens = max_tokens;
        }
        if let Some(timeout) = env_number("OPENAI_TIMEOUT_SECS")? {
            self.timeout_secs = Some(timeout);
        }
        Ok(self)
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the model.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the output token bound.
    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Sets the image detail level.
    #[must_use]
    pub const fn with_image_detail(mut self, detail: ImageDetail) -> Self {
        self.image_detail = Some(detail);
        self
    }

    /// Build the chat completions URL.
    #[must_use]
    pub fn chat_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: Self::DEFAULT_BASE_URL.to_owned(),
            model: Self::DEFAULT_MODEL.to_owned(),
            max_tokens: Self::DEFAULT_MAX_TOKENS,
            timeout_secs: None,
            image_detail: None,
        }
    }
}

fn env_number<T: FromStr + Default + PartialEq>(name: &str) -> Result<Option<T>> {
    match std::env::var(name) {
        Ok(raw) => parse_positive(&raw)
            .map(Some)
            .ok_or_else(|| Error::config(format!("{name} must be a positive integer, got '{raw}'"))),
        Err(_) => Ok(None),
    }
}

fn parse_positive<T: FromStr + Default + PartialEq>(raw: &str) -> Option<T> {
    raw.trim().parse().ok().filter(|n| *n != T::default())
}
