//! Error types for image upload validation.

use thiserror::Error;

/// Errors returned while validating an image upload or object key.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MediaDomainError {
    /// The declared content type is not an accepted image format.
    #[error("unsupported image type: {0}")]
    UnsupportedContentType(String),

    /// The upload carries no bytes.
    #[error("image upload is empty")]
    EmptyUpload,

    /// The upload exceeds the configured size limit.
    #[error("image is {actual} bytes, limit is {limit} bytes")]
    TooLarge {
        /// Maximum accepted size in bytes.
        limit: usize,
        /// Size of the rejected upload.
        actual: usize,
    },

    /// An object key is malformed.
    #[error("invalid image key: {0}")]
    InvalidKey(String),
}
