//! Image upload payloads, formats and object keys.

use super::MediaDomainError;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Default upload size limit: 5 MiB.
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Accepted image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// `image/jpeg`
    Jpeg,
    /// `image/png`
    Png,
    /// `image/webp`
    Webp,
    /// `image/gif`
    Gif,
}

impl ImageFormat {
    /// Resolves a MIME type, ignoring parameters and case.
    ///
    /// # Errors
    ///
    /// Returns [`MediaDomainError::UnsupportedContentType`] for anything other
    /// than JPEG, PNG, WebP or GIF.
    pub fn from_content_type(content_type: &str) -> Result<Self, MediaDomainError> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match essence.as_str() {
            "image/jpeg" | "image/jpg" => Ok(Self::Jpeg),
            "image/png" => Ok(Self::Png),
            "image/webp" => Ok(Self::Webp),
            "image/gif" => Ok(Self::Gif),
            _ => Err(MediaDomainError::UnsupportedContentType(
                content_type.to_owned(),
            )),
        }
    }

    fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "jpg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            "webp" => Some(Self::Webp),
            "gif" => Some(Self::Gif),
            _ => None,
        }
    }

    /// Returns the canonical MIME type.
    #[must_use]
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Webp => "image/webp",
            Self::Gif => "image/gif",
        }
    }

    /// Returns the file extension used for stored objects.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::Webp => "webp",
            Self::Gif => "gif",
        }
    }
}

/// A validated photo upload.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    format: ImageFormat,
    bytes: Vec<u8>,
}

impl ImageUpload {
    /// Validates an upload against the accepted formats and a size limit.
    ///
    /// # Errors
    ///
    /// Returns [`MediaDomainError::UnsupportedContentType`],
    /// [`MediaDomainError::EmptyUpload`] or [`MediaDomainError::TooLarge`].
    pub fn new(
        content_type: &str,
        bytes: Vec<u8>,
        max_bytes: usize,
    ) -> Result<Self, MediaDomainError> {
        let format = ImageFormat::from_content_type(content_type)?;
        if bytes.is_empty() {
            return Err(MediaDomainError::EmptyUpload);
        }
        if bytes.len() > max_bytes {
            return Err(MediaDomainError::TooLarge {
                limit: max_bytes,
                actual: bytes.len(),
            });
        }
        Ok(Self { format, bytes })
    }

    /// Returns the image format.
    #[must_use]
    pub const fn format(&self) -> ImageFormat {
        self.format
    }

    /// Returns the raw image bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageUpload")
            .field("format", &self.format)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Object name of a stored image: `<uuid>.<extension>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ImageKey(String);

impl ImageKey {
    /// Generates a fresh key for an image of the given format.
    #[must_use]
    pub fn generate(format: ImageFormat) -> Self {
        Self(format!("{}.{}", Uuid::new_v4().simple(), format.extension()))
    }

    /// Parses a key taken from a request path.
    ///
    /// # Errors
    ///
    /// Returns [`MediaDomainError::InvalidKey`] unless the value is a UUID
    /// stem followed by a known extension; this also rules out path
    /// traversal.
    pub fn parse(value: &str) -> Result<Self, MediaDomainError> {
        let invalid = || MediaDomainError::InvalidKey(value.to_owned());
        let (stem, extension) = value.rsplit_once('.').ok_or_else(invalid)?;
        if Uuid::try_parse(stem).is_err() || ImageFormat::from_extension(extension).is_none() {
            return Err(invalid());
        }
        Ok(Self(value.to_owned()))
    }

    /// Returns the image format implied by the key's extension.
    #[must_use]
    pub fn format(&self) -> Option<ImageFormat> {
        self.0
            .rsplit_once('.')
            .and_then(|(_, extension)| ImageFormat::from_extension(extension))
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of a successful upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredImage {
    /// Object key inside the store.
    pub key: ImageKey,
    /// Publicly reachable URL of the image.
    pub public_url: String,
}

/// Image bytes read back from a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    /// MIME type of the image.
    pub content_type: &'static str,
    /// Raw image bytes.
    pub bytes: Vec<u8>,
}
