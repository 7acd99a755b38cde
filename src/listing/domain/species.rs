//! Animal species accepted on listings.

use super::ParseListingValueError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Species of the animal a listing is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    /// A dog.
    Dog,
    /// A cat.
    Cat,
    /// Any other animal.
    Other,
}

impl Species {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dog => "dog",
            Self::Cat => "cat",
            Self::Other => "other",
        }
    }

    /// Returns the Spanish display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dog => "Perro",
            Self::Cat => "Gato",
            Self::Other => "Otro",
        }
    }
}

impl TryFrom<&str> for Species {
    type Error = ParseListingValueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "dog" => Ok(Self::Dog),
            "cat" => Ok(Self::Cat),
            "other" => Ok(Self::Other),
            _ => Err(ParseListingValueError::new("species", value)),
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
