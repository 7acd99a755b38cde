//! Validated free-text listing fields.

use super::ListingDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for titles and adoption names, matching `VARCHAR(100)`.
const MAX_TITLE_LENGTH: usize = 100;

/// Maximum length for descriptions.
const MAX_DESCRIPTION_LENGTH: usize = 2000;

/// Maximum length for zone text, matching `VARCHAR(120)`.
const MAX_ZONE_LENGTH: usize = 120;

/// Trims `raw` and enforces the non-empty and maximum-length rules.
fn validated(
    raw: &str,
    field: &'static str,
    max: usize,
) -> Result<String, ListingDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ListingDomainError::EmptyField { field });
    }
    let actual = trimmed.chars().count();
    if actual > max {
        return Err(ListingDomainError::FieldTooLong { field, max, actual });
    }
    Ok(trimmed.to_owned())
}

macro_rules! listing_text {
    ($(#[$meta:meta])* $name:ident, $field:literal, $max:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a validated value from user input.
            ///
            /// The input is trimmed before validation.
            ///
            /// # Errors
            ///
            /// Returns [`ListingDomainError::EmptyField`] when the value is
            /// blank or [`ListingDomainError::FieldTooLong`] when it exceeds
            /// the column limit.
            pub fn new(value: impl AsRef<str>) -> Result<Self, ListingDomainError> {
                validated(value.as_ref(), $field, $max).map(Self)
            }

            /// Returns the value as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

listing_text!(
    /// Listing headline: a post title or the name of an adoptable pet.
    ListingTitle,
    "title",
    MAX_TITLE_LENGTH
);

listing_text!(
    /// Free-form description of the animal and circumstances.
    Description,
    "description",
    MAX_DESCRIPTION_LENGTH
);

listing_text!(
    /// Approximate neighbourhood or area, never an exact address.
    Zone,
    "zone",
    MAX_ZONE_LENGTH
);

/// Maximum length for image URLs.
const MAX_IMAGE_URL_LENGTH: usize = 2048;

/// Public `http(s)` URL of a listing photo.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageUrl(String);

impl ImageUrl {
    /// Validates a photo URL.
    ///
    /// # Errors
    ///
    /// Returns [`ListingDomainError::InvalidImageUrl`] unless the trimmed value
    /// is an `http://` or `https://` URL without whitespace, or
    /// [`ListingDomainError::FieldTooLong`] for overly long values.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ListingDomainError> {
        let trimmed = value.as_ref().trim();
        let has_scheme = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .is_some_and(|rest| !rest.is_empty());
        if !has_scheme || trimmed.chars().any(char::is_whitespace) {
            return Err(ListingDomainError::InvalidImageUrl(trimmed.to_owned()));
        }
        let actual = trimmed.chars().count();
        if actual > MAX_IMAGE_URL_LENGTH {
            return Err(ListingDomainError::FieldTooLong {
                field: "image_url",
                max: MAX_IMAGE_URL_LENGTH,
                actual,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
