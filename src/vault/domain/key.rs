//! Storage keys for remembered edit tokens.

use crate::adoption::domain::AdoptionId;
use crate::post::domain::PostId;
use std::fmt;

/// Storage key identifying which listing a remembered token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKey {
    /// Token for a lost/found report, stored as `edit_token_<id>`.
    Post(PostId),
    /// Token for an adoption listing, stored as `adoption_edit_token_<id>`.
    Adoption(AdoptionId),
}

impl TokenKey {
    /// Returns the key prefix used in storage.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Post(_) => "edit_token_",
            Self::Adoption(_) => "adoption_edit_token_",
        }
    }
}

impl fmt::Display for TokenKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Post(id) => write!(f, "{}{id}", self.prefix()),
            Self::Adoption(id) => write!(f, "{}{id}", self.prefix()),
        }
    }
}

impl From<PostId> for TokenKey {
    fn from(id: PostId) -> Self {
        Self::Post(id)
    }
}

impl From<AdoptionId> for TokenKey {
    fn from(id: AdoptionId) -> Self {
        Self::Adoption(id)
    }
}
