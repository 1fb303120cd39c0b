//! Configuration management for the glance CLI.
//!
//! Settings are layered, later layers winning:
//! 1. Built-in defaults
//! 2. Config file (`~/.glance/config.toml`)
//! 3. Environment variables (including a `.env` file)
//! 4. Command-line flags

mod schema;

pub use schema::Settings;

use std::path::{Path, PathBuf};

use glance::openai::OpenAIConfig;
use tracing::{debug, info};

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Get the default config directory path.
#[must_use]
pub fn default_config_dir() -> PathBuf {
    dirs_next::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".glance")
}

/// Get the default config file path.
#[must_use]
pub fn config_path() -> PathBuf {
    default_config_dir().join("config.toml")
}

/// Load configuration from the default path.
pub async fn load_config() -> ConfigResult<Settings> {
    load_config_from(&config_path()).await
}

/// Load configuration from a specific path.
///
/// A missing file yields the default (empty) configuration.
pub async fn load_config_from(path: &Path) -> ConfigResult<Settings> {
    if !path.exists() {
        info!(path = %path.display(), "config file not found, using defaults");
        return Ok(Settings::default());
    }

    let content = tokio::fs::read_to_string(path).await?;
    let config: Settings = toml::from_str(&content)?;
    debug!(path = %path.display(), "loaded config file");

    Ok(config)
}

/// Key used when building a request that is printed but never sent.
pub const PREVIEW_API_KEY: &str = "dry-run";

/// Resolve the final client configuration.
///
/// # Errors
///
/// Returns [`glance::Error::Config`] if `OPENAI_API_KEY` is missing or an
/// environment override does not parse.
pub fn resolve(file: &Settings, flags: &Settings) -> glance::Result<OpenAIConfig> {
    layer(OpenAIConfig::api_key_from_env()?, file, flags)
}

/// Resolve configuration for `--dry-run`, where no credential is needed.
///
/// Falls back to [`PREVIEW_API_KEY`] when `OPENAI_API_KEY` is unset.
///
/// # Errors
///
/// Returns [`glance::Error::Config`] if an environment override does not
/// parse.
pub fn resolve_for_preview(file: &Settings, flags: &Settings) -> glance::Result<OpenAIConfig> {
    let api_key =
        OpenAIConfig::api_key_from_env().unwrap_or_else(|_| PREVIEW_API_KEY.to_owned());
    layer(api_key, file, flags)
}

fn layer(api_key: String, file: &Settings, flags: &Settings) -> glance::Result<OpenAIConfig> {
    let config = file.apply(OpenAIConfig::new(api_key)).with_env_overrides()?;
    Ok(flags.apply(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let cfg_dir = default_config_dir();
        assert!(cfg_dir.ends_with(".glance"));

        let cfg_path = config_path();
        assert!(cfg_path.ends_with("config.toml"));
    }

    #[test]
    fn test_layer_precedence() {
        let file = Settings {
            model: Some("from-file".to_owned()),
            max_tokens: Some(100),
            ..Settings::default()
        };
        let flags = Settings {
            model: Some("from-flag".to_owned()),
            ..Settings::default()
        };

        let config = layer("key".to_owned(), &file, &flags).expect("resolves");
        assert_eq!(config.api_key, "key");
        assert_eq!(config.model, "from-flag");
    }

    #[test]
    fn test_preview_does_not_need_a_key() {
        let flags = Settings {
            model: Some("gpt-4o-mini".to_owned()),
            ..Settings::default()
        };
        let config = resolve_for_preview(&Settings::default(), &flags).expect("resolves");
        assert!(!config.api_key.is_empty());
        assert_eq!(config.model, "gpt-4o-mini");
    }

    #[tokio::test]
    async fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("glance-test-does-not-exist.toml");
        let config = load_config_from(&path).await.expect("defaults");
        assert_eq!(config, Settings::default());
    }

    #[tokio::test]
    async fn test_load_file() {
        let path = std::env::temp_dir().join(format!("glance-test-{}.toml", std::process::id()));
        tokio::fs::write(&path, "model = \"gpt-4o-mini\"\ntimeout_secs = 20\n")
            .await
            .expect("write temp config");

        let config = load_config_from(&path).await.expect("loads");
        tokio::fs::remove_file(&path).await.ok();

        assert_eq!(config.model.as_deref(), Some("gpt-4o-mini"));
        assert_eq!(config.timeout_secs, Some(20));
    }

    #[tokio::test]
    async fn test_invalid_file_is_error() {
        let path =
            std::env::temp_dir().join(format!("glance-test-bad-{}.toml", std::process::id()));
        tokio::fs::write(&path, "max_tokens = \"lots\"\n")
            .await
            .expect("write temp config");

        let result = load_config_from(&path).await;
        tokio::fs::remove_file(&path).await.ok();

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }
}
