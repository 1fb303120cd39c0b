//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use glance::prelude::*;
//! ```

pub use crate::content::{ContentBlock, ImageDetail};
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::normalizer::{normalize, normalize_parts};
pub use crate::openai::{OpenAI, OpenAIConfig};
pub use crate::outcome::CompletionOutcome;
pub use crate::source::{ImageFormat, ImageSource, SourceKind};
