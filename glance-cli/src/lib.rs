//! Command-line front-end for glance.
//!
//! Collects a prompt and image arguments, resolves configuration, sends one
//! completion request and renders the outcome.

pub mod config;
pub mod error;
pub mod input;
pub mod render;

use glance::openai::{CompletionRequest, OpenAI};
use glance::{CompletionOutcome, ContentBlock, normalize};

use crate::error::Result;
use crate::input::ImageArg;

/// Read the image arguments and normalize them together with the message.
///
/// # Errors
///
/// Returns an error if an image cannot be read or is not an image, or if
/// there are too many images.
pub async fn prepare(message: &str, images: &[ImageArg]) -> Result<Vec<ContentBlock>> {
    let sources = input::load_all(images).await?;
    Ok(normalize(message, sources)?)
}

/// Build the request that [`ask`] would send, without sending it.
///
/// # Errors
///
/// See [`prepare`].
pub async fn preview(
    client: &OpenAI,
    message: &str,
    images: &[ImageArg],
) -> Result<CompletionRequest> {
    let blocks = prepare(message, images).await?;
    Ok(client.build_request(&blocks))
}

/// Send the message and images as one request.
///
/// # Errors
///
/// Only input preparation can fail; the call itself always yields an outcome.
pub async fn ask(client: &OpenAI, message: &str, images: &[ImageArg]) -> Result<CompletionOutcome> {
    let blocks = prepare(message, images).await?;
    Ok(client.complete(&blocks).await)
}
