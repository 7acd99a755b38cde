//! Report aggregate root and related types.

use super::{PostDomainError, PostId};
use crate::listing::domain::{
    ContactInfo, Description, EditToken, ImageUrl, ListingTitle, ParseListingValueError, Species,
    Zone,
};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the animal was lost or found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    /// The publisher lost the animal.
    Lost,
    /// The publisher found a stray animal.
    Found,
}

impl PostStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lost => "lost",
            Self::Found => "found",
        }
    }

    /// Returns the Spanish badge label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Lost => "Perdido",
            Self::Found => "Encontrado",
        }
    }
}

impl TryFrom<&str> for PostStatus {
    type Error = ParseListingValueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "lost" => Ok(Self::Lost),
            "found" => Ok(Self::Found),
            _ => Err(ParseListingValueError::new("post status", value)),
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated publisher input for a new report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    /// Report headline.
    pub title: ListingTitle,
    /// Free-form description.
    pub description: Description,
    /// Lost or found.
    pub status: PostStatus,
    /// Species of the animal.
    pub species: Species,
    /// Approximate zone of the event.
    pub zone: Zone,
    /// Date the animal was lost or found.
    pub event_date: NaiveDate,
    /// How to reach the publisher.
    pub contact: ContactInfo,
    /// Optional photo.
    pub image_url: Option<ImageUrl>,
}

impl PostDraft {
    /// Rejects drafts whose event date lies after the clock's current UTC
    /// date. Today is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`PostDomainError::FutureEventDate`] for future dates.
    pub fn ensure_event_date_not_future(&self, clock: &impl Clock) -> Result<(), PostDomainError> {
        let today = clock.utc().date_naive();
        if self.event_date > today {
            return Err(PostDomainError::FutureEventDate {
                event_date: self.event_date,
                today,
            });
        }
        Ok(())
    }
}

/// Lost/found report aggregate root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    id: PostId,
    title: ListingTitle,
    description: Description,
    status: PostStatus,
    species: Species,
    zone: Zone,
    event_date: NaiveDate,
    contact: ContactInfo,
    image_url: Option<ImageUrl>,
    created_at: DateTime<Utc>,
    resolved: bool,
    edit_token: EditToken,
}

/// Parameter object for reconstructing a persisted report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedPostData {
    /// Persisted identifier.
    pub id: PostId,
    /// Persisted headline.
    pub title: ListingTitle,
    /// Persisted description.
    pub description: Description,
    /// Persisted status.
    pub status: PostStatus,
    /// Persisted species.
    pub species: Species,
    /// Persisted zone.
    pub zone: Zone,
    /// Persisted event date.
    pub event_date: NaiveDate,
    /// Persisted contact (empty value once resolved).
    pub contact: ContactInfo,
    /// Persisted photo URL.
    pub image_url: Option<ImageUrl>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted resolved flag.
    pub resolved: bool,
    /// Persisted edit token.
    pub edit_token: EditToken,
}

impl Post {
    /// Creates a new unresolved report from validated input.
    ///
    /// A fresh identifier and edit token are generated and `created_at` is
    /// taken from `clock`.
    ///
    /// # Errors
    ///
    /// Returns [`PostDomainError::FutureEventDate`] when the event date is
    /// after the clock's current UTC date.
    pub fn publish(draft: PostDraft, clock: &impl Clock) -> Result<Self, PostDomainError> {
        draft.ensure_event_date_not_future(clock)?;
        Ok(Self {
            id: PostId::new(),
            title: draft.title,
            description: draft.description,
            status: draft.status,
            species: draft.species,
            zone: draft.zone,
            event_date: draft.event_date,
            contact: draft.contact,
            image_url: draft.image_url,
            created_at: clock.utc(),
            resolved: false,
            edit_token: EditToken::generate(),
        })
    }

    /// Reconstructs a report from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedPostData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            species: data.species,
            zone: data.zone,
            event_date: data.event_date,
            contact: data.contact,
            image_url: data.image_url,
            created_at: data.created_at,
            resolved: data.resolved,
            edit_token: data.edit_token,
        }
    }

    /// Returns the report identifier.
    #[must_use]
    pub const fn id(&self) -> PostId {
        self.id
    }

    /// Returns the headline.
    #[must_use]
    pub const fn title(&self) -> &ListingTitle {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub const fn description(&self) -> &Description {
        &self.description
    }

    /// Returns whether the animal was lost or found.
    #[must_use]
    pub const fn status(&self) -> PostStatus {
        self.status
    }

    /// Returns the species.
    #[must_use]
    pub const fn species(&self) -> Species {
        self.species
    }

    /// Returns the approximate zone.
    #[must_use]
    pub const fn zone(&self) -> &Zone {
        &self.zone
    }

    /// Returns the event date.
    #[must_use]
    pub const fn event_date(&self) -> NaiveDate {
        self.event_date
    }

    /// Returns the contact channel; its value is empty once resolved.
    #[must_use]
    pub const fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    /// Returns the photo URL, if any.
    #[must_use]
    pub const fn image_url(&self) -> Option<&ImageUrl> {
        self.image_url.as_ref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns `true` once the animal was reunited with its family.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Returns the edit token stored with the record.
    #[must_use]
    pub const fn edit_token(&self) -> &EditToken {
        &self.edit_token
    }

    /// Returns `true` when `candidate` is this report's edit token.
    #[must_use]
    pub fn is_authorised(&self, candidate: &str) -> bool {
        self.edit_token.matches(candidate)
    }

    /// Returns `true` when the creator-side token `stored` belongs to this
    /// report and the report can still be resolved.
    #[must_use]
    pub fn can_resolve(&self, stored: Option<&EditToken>) -> bool {
        !self.resolved && stored.is_some_and(|token| self.is_authorised(token.expose()))
    }

    /// Marks the report resolved and clears the contact value.
    ///
    /// # Errors
    ///
    /// Returns [`PostDomainError::AlreadyResolved`] if the report was already
    /// resolved.
    pub fn resolve(&mut self) -> Result<(), PostDomainError> {
        if self.resolved {
            return Err(PostDomainError::AlreadyResolved(self.id));
        }
        self.resolved = true;
        self.contact = ContactInfo::cleared(self.contact.contact_type());
        Ok(())
    }
}
