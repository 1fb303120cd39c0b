//! Normalized message content.
//!
//! A [`ContentBlock`] is one unit of content sent to the model. The wire form
//! follows the Chat Completions content-part schema: text parts carry their
//! text inline, and both kinds of image are sent as `image_url` parts, uploads
//! as `data:` URLs.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use serde::{Deserialize, Serialize};

use crate::source::ImageFormat;

/// Detail level for image processing on the remote side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageDetail {
    /// Low resolution processing.
    Low,
    /// High resolution processing.
    High,
    /// Let the model decide.
    Auto,
}

impl ImageDetail {
    /// Get the wire string for this detail level.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::High => "high",
            Self::Auto => "auto",
        }
    }
}

impl std::str::FromStr for ImageDetail {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "high" => Ok(Self::High),
            "auto" => Ok(Self::Auto),
            other => Err(crate::Error::config(format!(
                "image detail must be low, high or auto, got '{other}'"
            ))),
        }
    }
}

/// One normalized unit of message content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    /// Prompt text.
    Text(String),
    /// Inline image as bare standard base64.
    Base64Image {
        /// Base64 text, no `data:` prefix.
        data: String,
        /// Format sniffed from the original bytes.
        format: ImageFormat,
    },
    /// Image referenced by URL.
    UrlImage(String),
}

impl ContentBlock {
    /// Create a text block.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Create an inline image block from raw bytes.
    #[must_use]
    pub fn base64_image(bytes: &[u8]) -> Self {
        Self::Base64Image {
            data: encode_image_bytes(bytes),
            format: ImageFormat::detect(bytes),
        }
    }

    /// Create a URL image block.
    #[must_use]
    pub fn url_image(url: impl Into<String>) -> Self {
        Self::UrlImage(url.into())
    }

    /// Get the text if this is a text block.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Check if this block is an image (inline or URL).
    #[must_use]
    pub const fn is_image(&self) -> bool {
        matches!(self, Self::Base64Image { .. } | Self::UrlImage(_))
    }

    /// Convert to the wire content part.
    #[must_use]
    pub fn to_part(&self, detail: Option<ImageDetail>) -> ContentPart {
        match self {
            Self::Text(text) => ContentPart::Text { text: text.clone() },
            Self::Base64Image { data, format } => ContentPart::ImageUrl {
                image_url: ImageUrl {
                    url: format!("data:{};base64,{data}", format.mime_type()),
                    detail,
                },
            },
            Self::UrlImage(url) => ContentPart::ImageUrl {
                image_url: ImageUrl {
                    url: url.clone(),
                    detail,
                },
            },
        }
    }
}

/// Encode raw image bytes as standard, padded, unwrapped base64.
#[must_use]
pub fn encode_image_bytes(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Wire form of a content block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// `{"type": "text", "text": ...}`
    Text {
        /// The text.
        text: String,
    },
    /// `{"type": "image_url", "image_url": {...}}`
    ImageUrl {
        /// The image reference.
        image_url: ImageUrl,
    },
}

/// Image reference inside an `image_url` part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrl {
    /// Remote URL or `data:` URL.
    pub url: String,
    /// Optional detail level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<ImageDetail>,
}
