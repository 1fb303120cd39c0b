//! Unified error types for glance.
//!
//! Every failure the core can hit falls into one of a few categories:
//! - malformed collaborator input
//! - transport failures talking to the remote endpoint
//! - non-200 responses from the remote endpoint
//! - 200 responses that do not carry a completion
//! - missing or unreadable configuration
//!
//! At the client boundary all of them collapse into
//! [`CompletionOutcome::Failure`](crate::outcome::CompletionOutcome::Failure).

/// Result type alias for glance operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Diagnostic shown for every non-200 response, whatever the status or body.
pub const REMOTE_FAILURE_DIAGNOSTIC: &str =
    "Failed to get a response from the chatbot. Please check your input.";

/// The main error type for glance.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Malformed message or image source data from the collaborator.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The network call itself could not complete.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The remote endpoint answered with a non-200 status.
    #[error("{}", REMOTE_FAILURE_DIAGNOSTIC)]
    Remote {
        /// HTTP status code, kept for logging only.
        status: u16,
    },

    /// HTTP 200 but the body lacks `choices[0].message.content`.
    #[error("Malformed response: expected {expected}, got {got}")]
    MalformedResponse {
        /// What the client was looking for.
        expected: String,
        /// What it found instead.
        got: String,
    },

    /// Missing credential or invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Categories of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// See [`Error::InvalidInput`].
    InvalidInput,
    /// See [`Error::Transport`].
    Transport,
    /// See [`Error::Remote`].
    Remote,
    /// See [`Error::MalformedResponse`].
    MalformedResponse,
    /// See [`Error::Config`].
    Config,
}

impl Error {
    /// Create an invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a transport error.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Create a remote failure for the given status.
    #[must_use]
    pub const fn remote(status: u16) -> Self {
        Self::Remote { status }
    }

    /// Create a malformed response error.
    #[must_use]
    pub fn malformed_response(expected: impl Into<String>, got: impl Into<String>) -> Self {
        Self::MalformedResponse {
            expected: expected.into(),
            got: got.into(),
        }
    }

    /// Create a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Get the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::Transport(_) => ErrorKind::Transport,
            Self::Remote { .. } => ErrorKind::Remote,
            Self::MalformedResponse { .. } => ErrorKind::MalformedResponse,
            Self::Config(_) => ErrorKind::Config,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::transport("Request timed out")
        } else if err.is_connect() {
            Self::transport(format!("Connection failed: {err}"))
        } else {
            Self::transport(err.to_string())
        }
    }
}
