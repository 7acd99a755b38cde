//! Error types for listing field validation and parsing.

use thiserror::Error;

/// Errors returned while constructing listing values from user input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ListingDomainError {
    /// A required text field is empty after trimming.
    #[error("{field} must not be empty")]
    EmptyField {
        /// Name of the offending field.
        field: &'static str,
    },

    /// A text field exceeds its maximum length.
    #[error("{field} must be at most {max} characters, got {actual}")]
    FieldTooLong {
        /// Name of the offending field.
        field: &'static str,
        /// Maximum accepted number of characters.
        max: usize,
        /// Number of characters supplied.
        actual: usize,
    },

    /// The WhatsApp number does not contain a plausible phone number.
    #[error("invalid WhatsApp number '{0}', expected 7 to 15 digits")]
    InvalidWhatsApp(String),

    /// The email address is malformed.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    /// The requested page size is outside the accepted range.
    #[error("page size must be between 1 and {max}, got {actual}")]
    InvalidPageSize {
        /// Largest accepted page size.
        max: u32,
        /// Page size supplied.
        actual: u32,
    },

    /// A photo URL is not an absolute `http(s)` URL.
    #[error("invalid image URL '{0}'")]
    InvalidImageUrl(String),

    /// An edit token read from storage or a request is empty.
    #[error("edit token must not be empty")]
    EmptyEditToken,

    /// A categorical value could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseListingValueError),
}

/// Error returned while parsing a categorical listing value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct ParseListingValueError {
    /// The value category, e.g. `species`.
    pub kind: &'static str,
    /// The rejected raw value.
    pub value: String,
}

impl ParseListingValueError {
    /// Creates a parse error for a value category.
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
