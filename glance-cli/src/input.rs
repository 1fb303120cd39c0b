//! Turning command-line image arguments into image sources.

use std::convert::Infallible;
use std::path::PathBuf;
use std::str::FromStr;

use glance::{ImageFormat, ImageSource};
use tracing::debug;

use crate::error::{CliError, Result};

/// Maximum number of images in one request.
pub const MAX_IMAGES: usize = 10;

/// Default prompt when none is given.
pub const DEFAULT_MESSAGE: &str = "What's in this image?";

/// One `--image` argument.
///
/// - `file:<path>` reads a local file
/// - `url:<url>` sends the URL as-is
/// - anything containing `://` is a URL
/// - anything else is a file path
///
/// `file:` with no path stands for "no file chosen" and `url:` with no URL
/// for an empty URL field; both are dropped during normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageArg {
    /// A local file to upload.
    File(PathBuf),
    /// A remote image URL.
    Url(String),
}

impl FromStr for ImageArg {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if let Some(path) = s.strip_prefix("file:") {
            Ok(Self::File(PathBuf::from(path)))
        } else if let Some(url) = s.strip_prefix("url:") {
            Ok(Self::Url(url.to_owned()))
        } else if s.contains("://") {
            Ok(Self::Url(s.to_owned()))
        } else {
            Ok(Self::File(PathBuf::from(s)))
        }
    }
}

impl ImageArg {
    /// Turn the argument into an image source, reading files from disk.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::ReadImage`] if a non-empty file path cannot be read,
    /// or [`CliError::UnsupportedImage`] if the file is not a PNG, JPEG, GIF or
    /// WebP image.
    pub async fn load(&self) -> Result<ImageSource> {
        match self {
            Self::File(path) if path.as_os_str().is_empty() => Ok(ImageSource::bytes(Vec::new())),
            Self::File(path) => {
                let bytes = tokio::fs::read(path)
                    .await
                    .map_err(|source| CliError::ReadImage {
                        path: path.clone(),
                        source,
                    })?;
                let format = ImageFormat::from_magic_bytes(&bytes)
                    .ok_or_else(|| CliError::UnsupportedImage { path: path.clone() })?;
                debug!(path = %path.display(), bytes = bytes.len(), ?format, "read image file");
                Ok(ImageSource::bytes(bytes))
            }
            Self::Url(url) => Ok(ImageSource::url(url.clone())),
        }
    }
}

/// Load every argument in order.
///
/// # Errors
///
/// Returns [`CliError::TooManyImages`] above [`MAX_IMAGES`], or the first read
/// failure.
pub async fn load_all(args: &[ImageArg]) -> Result<Vec<ImageSource>> {
    if args.len() > MAX_IMAGES {
        return Err(CliError::TooManyImages {
            count: args.len(),
            max: MAX_IMAGES,
        });
    }

    let mut sources = Vec::with_capacity(args.len());
    for arg in args {
        sources.push(arg.load().await?);
    }
    Ok(sources)
}
