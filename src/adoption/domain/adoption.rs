//! Adoption listing aggregate root and related types.

use super::{AdoptionDomainError, AdoptionId};
use crate::listing::domain::{
    ContactInfo, Description, EditToken, ImageUrl, ListingTitle, ParseListingValueError, Species,
    Zone,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of community reports after which a listing's contact is hidden.
pub const DEFAULT_REPORT_THRESHOLD: u32 = 3;

/// Whether the animal still needs a home.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdoptionStatus {
    /// Looking for a family.
    Available,
    /// Already adopted.
    Adopted,
}

impl AdoptionStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Adopted => "adopted",
        }
    }

    /// Returns the Spanish badge label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "Disponible",
            Self::Adopted => "Adoptado",
        }
    }
}

impl TryFrom<&str> for AdoptionStatus {
    type Error = ParseListingValueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "available" => Ok(Self::Available),
            "adopted" => Ok(Self::Adopted),
            _ => Err(ParseListingValueError::new("adoption status", value)),
        }
    }
}

impl fmt::Display for AdoptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated publisher input for a new adoption listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdoptionDraft {
    /// Name of the animal.
    pub name: ListingTitle,
    /// Temperament, age, health notes.
    pub description: Description,
    /// Species of the animal.
    pub species: Species,
    /// Approximate zone where the animal is.
    pub zone: Zone,
    /// How to reach the publisher.
    pub contact: ContactInfo,
    /// Optional photo.
    pub image_url: Option<ImageUrl>,
}

/// Adoption listing aggregate root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adoption {
    id: AdoptionId,
    name: ListingTitle,
    description: Description,
    status: AdoptionStatus,
    species: Species,
    zone: Zone,
    contact: ContactInfo,
    image_url: Option<ImageUrl>,
    contact_hidden: bool,
    reports_count: u32,
    created_at: DateTime<Utc>,
    edit_token: EditToken,
}

/// Parameter object for reconstructing a persisted adoption listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedAdoptionData {
    /// Persisted identifier.
    pub id: AdoptionId,
    /// Persisted name.
    pub name: ListingTitle,
    /// Persisted description.
    pub description: Description,
    /// Persisted status.
    pub status: AdoptionStatus,
    /// Persisted species.
    pub species: Species,
    /// Persisted zone.
    pub zone: Zone,
    /// Persisted contact.
    pub contact: ContactInfo,
    /// Persisted photo URL.
    pub image_url: Option<ImageUrl>,
    /// Persisted review flag.
    pub contact_hidden: bool,
    /// Persisted report count.
    pub reports_count: u32,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted edit token.
    pub edit_token: EditToken,
}

impl Adoption {
    /// Creates a new available listing with no reports and a visible contact.
    #[must_use]
    pub fn publish(draft: AdoptionDraft, clock: &impl Clock) -> Self {
        Self {
            id: AdoptionId::new(),
            name: draft.name,
            description: draft.description,
            status: AdoptionStatus::Available,
            species: draft.species,
            zone: draft.zone,
            contact: draft.contact,
            image_url: draft.image_url,
            contact_hidden: false,
            reports_count: 0,
            created_at: clock.utc(),
            edit_token: EditToken::generate(),
        }
    }

    /// Reconstructs a listing from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedAdoptionData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            status: data.status,
            species: data.species,
            zone: data.zone,
            contact: data.contact,
            image_url: data.image_url,
            contact_hidden: data.contact_hidden,
            reports_count: data.reports_count,
            created_at: data.created_at,
            edit_token: data.edit_token,
        }
    }

    /// Returns the listing identifier.
    #[must_use]
    pub const fn id(&self) -> AdoptionId {
        self.id
    }

    /// Returns the animal's name.
    #[must_use]
    pub const fn name(&self) -> &ListingTitle {
        &self.name
    }

    /// Returns the description.
    #[must_use]
    pub const fn description(&self) -> &Description {
        &self.description
    }

    /// Returns the adoption status.
    #[must_use]
    pub const fn status(&self) -> AdoptionStatus {
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

    /// Returns the stored contact, whether or not it may be shown.
    #[must_use]
    pub const fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    /// Returns the photo URL, if any.
    #[must_use]
    pub const fn image_url(&self) -> Option<&ImageUrl> {
        self.image_url.as_ref()
    }

    /// Returns `true` while the listing is under community review.
    #[must_use]
    pub const fn is_contact_hidden(&self) -> bool {
        self.contact_hidden
    }

    /// Returns the number of community reports received.
    #[must_use]
    pub const fn reports_count(&self) -> u32 {
        self.reports_count
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the edit token stored with the record.
    #[must_use]
    pub const fn edit_token(&self) -> &EditToken {
        &self.edit_token
    }

    /// Returns `true` when the animal has been adopted.
    #[must_use]
    pub const fn is_adopted(&self) -> bool {
        matches!(self.status, AdoptionStatus::Adopted)
    }

    /// Returns `true` when the contact may be displayed: the animal is still
    /// available and the listing is not under review.
    #[must_use]
    pub const fn contact_visible(&self) -> bool {
        !self.is_adopted() && !self.contact_hidden
    }

    /// Returns `true` when `candidate` is this listing's edit token.
    #[must_use]
    pub fn is_authorised(&self, candidate: &str) -> bool {
        self.edit_token.matches(candidate)
    }

    /// Returns `true` when the holder of `stored` may mark the animal adopted.
    #[must_use]
    pub fn can_mark_adopted(&self, stored: Option<&EditToken>) -> bool {
        !self.is_adopted() && stored.is_some_and(|token| self.is_authorised(token.expose()))
    }

    /// Returns `true` when visitors may still report the listing.
    #[must_use]
    pub fn can_report(&self) -> bool {
        self.ensure_reportable().is_ok()
    }

    /// Checks that the listing still accepts reports.
    ///
    /// # Errors
    ///
    /// Returns [`AdoptionDomainError::ReportNotAllowed`] for adopted
    /// listings and [`AdoptionDomainError::UnderReview`] when the contact is
    /// already hidden.
    pub const fn ensure_reportable(&self) -> Result<(), AdoptionDomainError> {
        if self.is_adopted() {
            return Err(AdoptionDomainError::ReportNotAllowed(self.id));
        }
        if self.contact_hidden {
            return Err(AdoptionDomainError::UnderReview(self.id));
        }
        Ok(())
    }

    /// Marks the animal adopted.
    ///
    /// # Errors
    ///
    /// Returns [`AdoptionDomainError::AlreadyAdopted`] if it already was.
    pub const fn mark_adopted(&mut self) -> Result<(), AdoptionDomainError> {
        if self.is_adopted() {
            return Err(AdoptionDomainError::AlreadyAdopted(self.id));
        }
        self.status = AdoptionStatus::Adopted;
        Ok(())
    }

    /// Records one community report.
    ///
    /// The contact is hidden once the count reaches `threshold`.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Self::ensure_reportable`].
    pub fn record_report(&mut self, threshold: u32) -> Result<(), AdoptionDomainError> {
        self.ensure_reportable()?;
        self.reports_count = self.reports_count.saturating_add(1);
        if self.reports_count >= threshold {
            self.contact_hidden = true;
        }
        Ok(())
    }
}
