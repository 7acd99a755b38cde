//! Proof-of-authorship token handed to the publisher of a listing.

use super::ListingDomainError;
use sha2::{Digest, Sha256};
use std::fmt;
use uuid::Uuid;

/// Opaque token generated when a listing is published.
///
/// The publisher keeps a copy (see [`crate::vault`]) and presents it to
/// resolve or adopt the listing. The token is a convenience gate rather than
/// an access-control system: it only proves the caller saw the creation
/// response.
///
/// `Debug` redacts the value so tokens never end up in logs.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct EditToken(String);

impl EditToken {
    /// Generates a fresh random token (32 lowercase hex characters).
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Wraps a token read from storage or a request header.
    ///
    /// # Errors
    ///
    /// Returns [`ListingDomainError::EmptyEditToken`] when the value is blank.
    pub fn parse(value: impl AsRef<str>) -> Result<Self, ListingDomainError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ListingDomainError::EmptyEditToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the raw token value.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Returns `true` when `candidate` equals this token.
    ///
    /// Both sides are hashed first so the comparison time does not depend
    /// on the length of the common prefix.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        let expected = Sha256::digest(self.0.as_bytes());
        let presented = Sha256::digest(candidate.trim().as_bytes());
        expected
            .iter()
            .zip(presented.iter())
            .fold(0_u8, |acc, (left, right)| acc | (left ^ right))
            == 0
    }
}

impl fmt::Debug for EditToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EditToken(..)")
    }
}
