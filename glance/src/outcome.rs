//! Terminal result of one completion call.

use std::fmt;

use crate::error::{Error, ErrorKind};

/// Success or failure of one remote call, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The model's reply text.
    Success(String),
    /// The call failed.
    Failure {
        /// Category of the underlying error.
        kind: ErrorKind,
        /// Human-readable message to display.
        diagnostic: String,
    },
}

impl CompletionOutcome {
    /// Check if this is a success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Get the reply text if this is a success.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Success(text) => Some(text),
            Self::Failure { .. } => None,
        }
    }

    /// Get the diagnostic if this is a failure.
    #[must_use]
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure { diagnostic, .. } => Some(diagnostic),
        }
    }

    /// Get the error kind if this is a failure.
    #[must_use]
    pub const fn failure_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Success(_) => None,
            Self::Failure { kind, .. } => Some(*kind),
        }
    }
}

impl From<Error> for CompletionOutcome {
    fn from(err: Error) -> Self {
        Self::Failure {
            kind: err.kind(),
            diagnostic: err.to_string(),
        }
    }
}

impl From<crate::Result<String>> for CompletionOutcome {
    fn from(result: crate::Result<String>) -> Self {
        match result {
            Ok(text) => Self::Success(text),
            Err(err) => err.into(),
        }
    }
}

impl fmt::Display for CompletionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(text) => f.write_str(text),
            Self::Failure { diagnostic, .. } => f.write_str(diagnostic),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::REMOTE_FAILURE_DIAGNOSTIC;

    #[test]
    fn test_success_accessors() {
        let outcome = CompletionOutcome::from(Ok::<_, Error>("a cat".to_owned()));
        assert!(outcome.is_success());
        assert_eq!(outcome.text(), Some("a cat"));
        assert_eq!(outcome.diagnostic(), None);
        assert_eq!(outcome.to_string(), "a cat");
    }

    #[test]
    fn test_remote_error_collapses_to_fixed_diagnostic() {
        let outcome = CompletionOutcome::from(Error::remote(503));
        assert!(!outcome.is_success());
        assert_eq!(outcome.failure_kind(), Some(ErrorKind::Remote));
        assert_eq!(outcome.diagnostic(), Some(REMOTE_FAILURE_DIAGNOSTIC));
    }

    #[test]
    fn test_malformed_keeps_kind() {
        let outcome: CompletionOutcome =
            Err::<String, _>(Error::malformed_response("choices", "nothing")).into();
        assert_eq!(outcome.failure_kind(), Some(ErrorKind::MalformedResponse));
        assert_eq!(outcome.text(), None);
    }
}
