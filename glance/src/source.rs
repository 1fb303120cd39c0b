//! User-supplied image sources.
//!
//! An [`ImageSource`] is one image as the collaborator hands it over: either the
//! raw bytes of an uploaded file or a remote URL reference. Nothing here touches
//! the network or the filesystem.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Supported image formats for uploaded content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ImageFormat {
    /// PNG format (default).
    #[default]
    Png,
    /// JPEG format.
    Jpeg,
    /// GIF format.
    Gif,
    /// WebP format.
    Webp,
}

impl ImageFormat {
    /// Get the MIME type for this format.
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::Webp => "image/webp",
        }
    }

    /// Detect format from magic bytes (file signature).
    #[must_use]
    pub fn from_magic_bytes(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [0x89, 0x50, 0x4E, 0x47, ..] => Some(Self::Png),
            [0xFF, 0xD8, 0xFF, ..] => Some(Self::Jpeg),
            [0x47, 0x49, 0x46, 0x38, ..] => Some(Self::Gif),
            [0x52, 0x49, 0x46, 0x46, _, _, _, _, b'W', b'E', b'B', b'P', ..] => Some(Self::Webp),
            _ => None,
        }
    }

    /// Detect the format of an uploaded file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the bytes are not a PNG, JPEG, GIF or
    /// WebP image.
    pub fn sniff(bytes: &[u8]) -> Result<Self> {
        Self::from_magic_bytes(bytes).ok_or_else(|| {
            Error::invalid_input("uploaded file is not a PNG, JPEG, GIF or WebP image")
        })
    }

    /// Detect format from bytes, falling back to PNG.
    #[must_use]
    pub fn detect(bytes: &[u8]) -> Self {
        Self::from_magic_bytes(bytes).unwrap_or_default()
    }
}

/// How the collaborator obtained an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Bytes of an uploaded file.
    UploadedBytes,
    /// A remote URL reference.
    RemoteUrl,
}

impl SourceKind {
    /// Get the canonical string form of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UploadedBytes => "upload",
            Self::RemoteUrl => "url",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for SourceKind {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for SourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upload" | "file" | "uploaded_bytes" => Ok(Self::UploadedBytes),
            "url" | "remote_url" => Ok(Self::RemoteUrl),
            other => Err(Error::invalid_input(format!(
                "unrecognized image source kind '{other}'"
            ))),
        }
    }
}

/// One user-supplied image.
///
/// Immutable once constructed. An empty payload (no file chosen, empty URL
/// field) is representable and is dropped during normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Raw bytes of an uploaded image.
    UploadedBytes(Vec<u8>),
    /// URL of a remotely hosted image, passed through unvalidated.
    RemoteUrl(String),
}

impl ImageSource {
    /// Create a source from uploaded bytes.
    #[must_use]
    pub fn bytes(data: impl Into<Vec<u8>>) -> Self {
        Self::UploadedBytes(data.into())
    }

    /// Create a source from a remote URL.
    #[must_use]
    pub fn url(url: impl Into<String>) -> Self {
        Self::RemoteUrl(url.into())
    }

    /// Create a source from the bytes of an uploaded file, checking that they
    /// are an image.
    ///
    /// Empty bytes stand for "no file chosen" and are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if non-empty bytes are not a recognized
    /// image format.
    pub fn upload(data: impl Into<Vec<u8>>) -> Result<Self> {
        let data = data.into();
        if !data.is_empty() {
            ImageFormat::sniff(&data)?;
        }
        Ok(Self::UploadedBytes(data))
    }

    /// Create a source from a `(kind, payload)` pair as a form would submit it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `kind` is not a recognized source
    /// kind, an upload is not an image, or a URL payload is not valid UTF-8.
    pub fn from_parts(kind: &str, data: Vec<u8>) -> Result<Self> {
        match kind.parse::<SourceKind>()? {
            SourceKind::UploadedBytes => Self::upload(data),
            SourceKind::RemoteUrl => String::from_utf8(data)
                .map(Self::RemoteUrl)
                .map_err(|e| Error::invalid_input(format!("image URL is not valid UTF-8: {e}"))),
        }
    }

    /// Get the kind of this source.
    #[must_use]
    pub const fn kind(&self) -> SourceKind {
        match self {
            Self::UploadedBytes(_) => SourceKind::UploadedBytes,
            Self::RemoteUrl(_) => SourceKind::RemoteUrl,
        }
    }

    /// Check whether the source carries no data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::UploadedBytes(data) => data.is_empty(),
            Self::RemoteUrl(url) => url.is_empty(),
        }
    }
}
