//! Card and detail projections for reports and adoption listings.

use super::{
    ADOPTED_RIBBON, ContactLink, RESOLVED_CONTACT_NOTICE, RESOLVED_RIBBON, REVIEW_NOTICE,
    ShareLink, ShareLinks, ShareSection, ViewError, format_relative_date,
};
use crate::adoption::domain::{Adoption, AdoptionId, AdoptionStatus};
use crate::listing::domain::{EditToken, Species};
use crate::post::domain::{Post, PostId, PostStatus};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

/// Board card for a lost/found report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostCard {
    /// Report identifier.
    pub id: PostId,
    /// Headline.
    pub title: String,
    /// Lost or found.
    pub status: PostStatus,
    /// `Perdido` or `Encontrado`.
    pub status_label: &'static str,
    /// Species of the animal.
    pub species: Species,
    /// `Perro`, `Gato` or `Otro`.
    pub species_label: &'static str,
    /// Approximate zone.
    pub zone: String,
    /// Date of the event.
    pub event_date: NaiveDate,
    /// How long ago the event happened.
    pub event_date_relative: String,
    /// Photo URL, if any.
    pub image_url: Option<String>,
    /// Whether the animal is back home.
    pub resolved: bool,
    /// Ribbon text for resolved reports.
    pub ribbon: Option<&'static str>,
    /// Contact, only while unresolved.
    pub contact: Option<ContactLink>,
}

impl PostCard {
    /// Projects `post` for the board as seen at `now`.
    #[must_use]
    pub fn from_post(post: &Post, now: DateTime<Utc>) -> Self {
        let event_instant = post.event_date().and_time(NaiveTime::MIN).and_utc();
        let resolved = post.is_resolved();
        Self {
            id: post.id(),
            title: post.title().as_str().to_owned(),
            status: post.status(),
            status_label: post.status().label(),
            species: post.species(),
            species_label: post.species().label(),
            zone: post.zone().as_str().to_owned(),
            event_date: post.event_date(),
            event_date_relative: format_relative_date(event_instant, now),
            image_url: post.image_url().map(|url| url.as_str().to_owned()),
            resolved,
            ribbon: resolved.then_some(RESOLVED_RIBBON),
            contact: if resolved {
                None
            } else {
                ContactLink::for_contact(post.contact())
            },
        }
    }
}

/// Detail page for a lost/found report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostDetail {
    /// Card fields.
    #[serde(flatten)]
    pub card: PostCard,
    /// Full description.
    pub description: String,
    /// Event date as `dd/mm/yyyy`.
    pub event_date_display: String,
    /// Publication timestamp.
    pub created_at: DateTime<Utc>,
    /// Notice replacing the contact once resolved.
    pub notice: Option<&'static str>,
    /// Share sheet payload.
    pub share: ShareLink,
    /// Whether to offer "Marcar como resuelto".
    pub can_mark_resolved: bool,
}

impl PostDetail {
    /// Projects `post` for its detail page.
    ///
    /// `stored_token` is the viewer's remembered edit token for this report,
    /// if any; it only decides `can_mark_resolved` and is never echoed.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::ShareTemplate`] if the share link cannot be
    /// rendered.
    pub fn from_post(
        post: &Post,
        now: DateTime<Utc>,
        stored_token: Option<&EditToken>,
        share_links: &ShareLinks,
    ) -> Result<Self, ViewError> {
        let share = share_links.link(
            ShareSection::Posts,
            post.id().into_inner(),
            post.title().as_str(),
        )?;
        Ok(Self {
            card: PostCard::from_post(post, now),
            description: post.description().as_str().to_owned(),
            event_date_display: post.event_date().format("%d/%m/%Y").to_string(),
            created_at: post.created_at(),
            notice: post.is_resolved().then_some(RESOLVED_CONTACT_NOTICE),
            share,
            can_mark_resolved: post.can_resolve(stored_token),
        })
    }
}

/// Board card for an adoption listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdoptionCard {
    /// Listing identifier.
    pub id: AdoptionId,
    /// Name of the animal.
    pub name: String,
    /// Available or adopted.
    pub status: AdoptionStatus,
    /// `Disponible` or `Adoptado`.
    pub status_label: &'static str,
    /// Species of the animal.
    pub species: Species,
    /// `Perro`, `Gato` or `Otro`.
    pub species_label: &'static str,
    /// Approximate zone.
    pub zone: String,
    /// How long ago the listing was published.
    pub published_relative: String,
    /// Photo URL, if any.
    pub image_url: Option<String>,
    /// Whether the animal was adopted.
    pub adopted: bool,
    /// Ribbon text for adopted listings.
    pub ribbon: Option<&'static str>,
    /// Notice shown while under community review.
    pub review_notice: Option<&'static str>,
    /// Contact, only while available and not under review.
    pub contact: Option<ContactLink>,
}

impl AdoptionCard {
    /// Projects `adoption` for the board as seen at `now`.
    #[must_use]
    pub fn from_adoption(adoption: &Adoption, now: DateTime<Utc>) -> Self {
        let adopted = adoption.is_adopted();
        Self {
            id: adoption.id(),
            name: adoption.name().as_str().to_owned(),
            status: adoption.status(),
            status_label: adoption.status().label(),
            species: adoption.species(),
            species_label: adoption.species().label(),
            zone: adoption.zone().as_str().to_owned(),
            published_relative: format_relative_date(adoption.created_at(), now),
            image_url: adoption.image_url().map(|url| url.as_str().to_owned()),
            adopted,
            ribbon: adopted.then_some(ADOPTED_RIBBON),
            review_notice: (adoption.is_contact_hidden() && !adopted).then_some(REVIEW_NOTICE),
            contact: if adoption.contact_visible() {
                ContactLink::for_contact(adoption.contact())
            } else {
                None
            },
        }
    }
}

/// Detail page for an adoption listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdoptionDetail {
    /// Card fields.
    #[serde(flatten)]
    pub card: AdoptionCard,
    /// Full description.
    pub description: String,
    /// Publication timestamp.
    pub created_at: DateTime<Utc>,
    /// Number of community reports so far.
    pub reports_count: u32,
    /// Share sheet payload.
    pub share: ShareLink,
    /// Whether to offer "Reportar".
    pub can_report: bool,
    /// Whether to offer "Marcar como adoptado".
    pub can_mark_adopted: bool,
}

impl AdoptionDetail {
    /// Projects `adoption` for its detail page.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::ShareTemplate`] if the share link cannot be
    /// rendered.
    pub fn from_adoption(
        adoption: &Adoption,
        now: DateTime<Utc>,
        stored_token: Option<&EditToken>,
        share_links: &ShareLinks,
    ) -> Result<Self, ViewError> {
        let share = share_links.link(
            ShareSection::Adoptions,
            adoption.id().into_inner(),
            adoption.name().as_str(),
        )?;
        Ok(Self {
            card: AdoptionCard::from_adoption(adoption, now),
            description: adoption.description().as_str().to_owned(),
            created_at: adoption.created_at(),
            reports_count: adoption.reports_count(),
            share,
            can_report: adoption.can_report(),
            can_mark_adopted: adoption.can_mark_adopted(stored_token),
        })
    }
}
