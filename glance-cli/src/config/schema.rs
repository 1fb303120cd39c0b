//! Settings layer schema.

use glance::ImageDetail;
use glance::openai::OpenAIConfig;
use serde::{Deserialize, Serialize};

/// One layer of client settings: the contents of `config.toml`, or the
/// command-line flags.
///
/// Every field is optional; anything left out falls through to the layer
/// below. The API key is not accepted here and only ever comes from
/// `OPENAI_API_KEY`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Model identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// API base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Output token bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// Image detail level (`low`, `high`, `auto`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_detail: Option<ImageDetail>,
}

impl Settings {
    /// Apply the settings that are present on top of `config`.
    #[must_use]
    pub fn apply(&self, mut config: OpenAIConfig) -> OpenAIConfig {
        if let Some(model) = &self.model {
            config.model.clone_from(model);
        }
        if let Some(base_url) = &self.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(max_tokens) = self.max_tokens {
            config.max_tokens = max_tokens;
        }
        if self.timeout_secs.is_some() {
            config.timeout_secs = self.timeout_secs;
        }
        if self.image_detail.is_some() {
            config.image_detail = self.image_detail;
        }
        config
    }
}
