//! Glance - send a prompt and a handful of images to a multimodal chat model.
//!
//! The crate has two halves:
//!
//! - [`normalizer`] turns a message and user-supplied [`ImageSource`]s into an
//!   ordered list of [`ContentBlock`]s.
//! - [`openai`] posts that list as one Chat Completions request and reports the
//!   result as a [`CompletionOutcome`].
//!
//! ```rust,ignore
//! use glance::prelude::*;
//!
//! let client = OpenAI::from_env()?;
//! let blocks = normalize("What's in this image?", [ImageSource::url(url)])?;
//! match client.complete(&blocks).await {
//!     CompletionOutcome::Success(text) => println!("{text}"),
//!     CompletionOutcome::Failure { diagnostic, .. } => eprintln!("{diagnostic}"),
//! }
//! ```

pub mod content;
pub mod error;
pub mod normalizer;
pub mod openai;
pub mod outcome;
pub mod prelude;
pub mod source;

pub use content::{ContentBlock, ContentPart, ImageDetail, encode_image_bytes};
pub use error::{Error, ErrorKind, REMOTE_FAILURE_DIAGNOSTIC, Result};
pub use normalizer::{normalize, normalize_parts};
pub use outcome::CompletionOutcome;
pub use source::{ImageFormat, ImageSource, SourceKind};
