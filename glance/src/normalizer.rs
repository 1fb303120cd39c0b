//! Input normalization.
//!
//! Turns a prompt and the images a user picked into the ordered content list
//! sent to the model. The text block, when present, always comes first; image
//! blocks keep the order the user supplied them in.

use tracing::debug;

use crate::content::ContentBlock;
use crate::error::Result;
use crate::source::ImageSource;

/// Normalize a message and its image sources into ordered content blocks.
///
/// Sources with no data are skipped rather than sent as empty blocks, so the
/// number of image blocks equals the number of non-empty sources.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`](crate::Error::InvalidInput) if the input
/// cannot be represented. With typed [`ImageSource`] values this does not
/// happen; malformed collaborator data is rejected earlier by
/// [`ImageSource::upload`] and [`ImageSource::from_parts`].
pub fn normalize<I>(message: &str, sources: I) -> Result<Vec<ContentBlock>>
where
    I: IntoIterator<Item = ImageSource>,
{
    let sources = sources.into_iter();
    let mut blocks = Vec::with_capacity(1 + sources.size_hint().0);

    if !message.is_empty() {
        blocks.push(ContentBlock::text(message));
    }

    let mut skipped = 0_usize;
    for source in sources {
        if source.is_empty() {
            skipped += 1;
            continue;
        }
        blocks.push(match source {
            ImageSource::UploadedBytes(bytes) => ContentBlock::base64_image(&bytes),
            ImageSource::RemoteUrl(url) => ContentBlock::url_image(url),
        });
    }

    debug!(
        blocks = blocks.len(),
        skipped,
        has_text = !message.is_empty(),
        "normalized input"
    );

    Ok(blocks)
}

/// Normalize `(kind, payload)` pairs as submitted by a form.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`](crate::Error::InvalidInput) on the first
/// pair whose kind is unrecognized, whose upload is not an image, or whose URL
/// payload is not UTF-8.
pub fn normalize_parts<K, I>(message: &str, parts: I) -> Result<Vec<ContentBlock>>
where
    K: AsRef<str>,
    I: IntoIterator<Item = (K, Vec<u8>)>,
{
    let sources = parts
        .into_iter()
        .map(|(kind, data)| ImageSource::from_parts(kind.as_ref(), data))
        .collect::<Result<Vec<_>>>()?;
    normalize(message, sources)
}
