//! Error types for the command-line front-end.

use std::path::PathBuf;

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors raised before or around a completion call.
///
/// Failures of the call itself are not errors here; they come back as a
/// [`CompletionOutcome`](glance::CompletionOutcome) and are rendered.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Core library error (missing credential, invalid input).
    #[error(transparent)]
    Core(#[from] glance::Error),

    /// Config file problem.
    #[error("config error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// An image file could not be read.
    #[error("failed to read image {}: {source}", path.display())]
    ReadImage {
        /// The file that failed.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// An image file is not in a format the model accepts.
    #[error("{} is not a PNG, JPEG, GIF or WebP image", path.display())]
    UnsupportedImage {
        /// The offending file.
        path: PathBuf,
    },

    /// More images than a single request accepts.
    #[error("too many images: {count} given, at most {max} allowed")]
    TooManyImages {
        /// Number supplied.
        count: usize,
        /// Upper bound.
        max: usize,
    },

    /// Writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
