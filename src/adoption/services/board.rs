//! Service layer for the adoption board.

use crate::adoption::{
    domain::{
        Adoption, AdoptionDomainError, AdoptionDraft, AdoptionId, AdoptionStatus,
        DEFAULT_REPORT_THRESHOLD,
    },
    ports::{AdoptionFilter, AdoptionRepository, AdoptionRepositoryError},
};
use crate::listing::domain::{
    ContactInfo, ContactType, DEFAULT_PAGE_SIZE, Description, EditToken, ImageUrl,
    ListingDomainError, ListingTitle, Page, PageRequest, SearchTerm, Species, Zone, filter_choice,
};
use crate::media::{
    domain::ImageUpload,
    ports::{ImageStore, ImageStoreError},
};
use mockable::Clock;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Raw publisher input for an adoption listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AdoptionSubmission {
    /// Name of the animal.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// `dog`, `cat` or `other`.
    pub species: String,
    /// Approximate zone.
    pub zone_text: String,
    /// `whatsapp`, `email` or `form`.
    pub contact_type: String,
    /// Phone number, e-mail address or free text.
    #[serde(default)]
    pub contact_value: String,
    /// Already uploaded photo URL.
    #[serde(default)]
    pub image_url: Option<String>,
}

impl AdoptionSubmission {
    fn into_draft(self) -> Result<AdoptionDraft, ListingDomainError> {
        let contact_type = ContactType::try_from(self.contact_type.as_str())?;
        let image_url = self
            .image_url
            .filter(|url| !url.trim().is_empty())
            .map(ImageUrl::new)
            .transpose()?;

        Ok(AdoptionDraft {
            name: ListingTitle::new(&self.name)?,
            description: Description::new(&self.description)?,
            species: Species::try_from(self.species.as_str())?,
            zone: Zone::new(&self.zone_text)?,
            contact: ContactInfo::new(contact_type, &self.contact_value)?,
            image_url,
        })
    }
}

/// Request to publish an adoption listing, optionally with a photo.
#[derive(Debug, Clone)]
pub struct PublishAdoptionRequest {
    submission: AdoptionSubmission,
    image: Option<ImageUpload>,
}

impl PublishAdoptionRequest {
    /// Creates a request from form input.
    #[must_use]
    pub const fn new(submission: AdoptionSubmission) -> Self {
        Self {
            submission,
            image: None,
        }
    }

    /// Attaches a photo that is uploaded before the listing is stored.
    #[must_use]
    pub fn with_image(mut self, image: ImageUpload) -> Self {
        self.image = Some(image);
        self
    }
}

/// Raw listing query for the adoption board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AdoptionQuery {
    /// `available`, `adopted`, `all` or blank.
    #[serde(default)]
    pub status: Option<String>,
    /// `dog`, `cat`, `other`, `all` or blank.
    #[serde(default)]
    pub species: Option<String>,
    /// Free-text search over name and description.
    #[serde(default)]
    pub q: Option<String>,
    /// Zero-based page index.
    #[serde(default)]
    pub page: Option<u32>,
}

impl AdoptionQuery {
    fn to_filter(&self) -> Result<AdoptionFilter, ListingDomainError> {
        Ok(AdoptionFilter {
            status: filter_choice(self.status.as_deref())
                .map(AdoptionStatus::try_from)
                .transpose()?,
            species: filter_choice(self.species.as_deref())
                .map(Species::try_from)
                .transpose()?,
            search: self.q.as_deref().and_then(SearchTerm::parse),
        })
    }
}

/// Result of a successful publication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedAdoption {
    /// The stored listing.
    pub adoption: Adoption,
    /// Token the publisher keeps to mark the animal adopted later.
    pub edit_token: EditToken,
}

/// Service-level errors for the adoption board.
#[derive(Debug, Error)]
pub enum AdoptionBoardError {
    /// Domain validation or a state transition failed.
    #[error(transparent)]
    Domain(#[from] AdoptionDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] AdoptionRepositoryError),
    /// The photo upload failed; nothing was stored.
    #[error(transparent)]
    Storage(#[from] ImageStoreError),
    /// The listing does not exist.
    #[error("adoption not found: {0}")]
    NotFound(AdoptionId),
    /// The supplied edit token does not belong to the listing.
    #[error("edit token does not match adoption {0}")]
    InvalidEditToken(AdoptionId),
}

impl From<ListingDomainError> for AdoptionBoardError {
    fn from(err: ListingDomainError) -> Self {
        Self::Domain(AdoptionDomainError::Listing(err))
    }
}

/// Result type for adoption board operations.
pub type AdoptionBoardResult<T> = Result<T, AdoptionBoardError>;

/// Orchestrates adoption listing publication, browsing, adoption and
/// community reports.
pub struct AdoptionBoardService<R, S, C>
where
    R: AdoptionRepository + ?Sized,
    S: ImageStore + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    images: Arc<S>,
    clock: Arc<C>,
    page_size: u32,
    report_threshold: u32,
}

impl<R, S, C> AdoptionBoardService<R, S, C>
where
    R: AdoptionRepository + ?Sized,
    S: ImageStore + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a board service with the default page size and report
    /// threshold.
    #[must_use]
    pub const fn new(repository: Arc<R>, images: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            repository,
            images,
            clock,
            page_size: DEFAULT_PAGE_SIZE,
            report_threshold: DEFAULT_REPORT_THRESHOLD,
        }
    }

    /// Overrides the page size used by [`Self::list`].
    ///
    /// # Errors
    ///
    /// Returns [`ListingDomainError::InvalidPageSize`] for sizes outside
    /// `1..=50`.
    pub fn with_page_size(mut self, page_size: u32) -> Result<Self, ListingDomainError> {
        PageRequest::new(0, page_size)?;
        self.page_size = page_size;
        Ok(self)
    }

    /// Overrides the number of reports that hides a listing's contact.
    #[must_use]
    pub const fn with_report_threshold(mut self, report_threshold: u32) -> Self {
        self.report_threshold = report_threshold;
        self
    }

    /// Validates and stores a new listing.
    ///
    /// # Errors
    ///
    /// Returns [`AdoptionBoardError::Domain`] for invalid input,
    /// [`AdoptionBoardError::Storage`] when the upload fails and
    /// [`AdoptionBoardError::Repository`] when persistence fails.
    pub async fn publish(
        &self,
        request: PublishAdoptionRequest,
    ) -> AdoptionBoardResult<PublishedAdoption> {
        let PublishAdoptionRequest { submission, image } = request;
        let mut draft = submission.into_draft()?;

        if let Some(upload) = image {
            let stored = self.images.put(&upload).await.inspect_err(|err| {
                warn!(error = %err, "photo upload failed, adoption not published");
            })?;
            draft.image_url = Some(ImageUrl::new(&stored.public_url)?);
        }

        let adoption = Adoption::publish(draft, &*self.clock);
        self.repository.store(&adoption).await?;
        info!(adoption_id = %adoption.id(), "adoption published");

        let edit_token = adoption.edit_token().clone();
        Ok(PublishedAdoption {
            adoption,
            edit_token,
        })
    }

    /// Retrieves a listing by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AdoptionBoardError::Repository`] when the lookup fails.
    pub async fn get(&self, id: AdoptionId) -> AdoptionBoardResult<Option<Adoption>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Returns one page of listings, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AdoptionBoardError::Domain`] for unknown status or species
    /// values and [`AdoptionBoardError::Repository`] when the query fails.
    pub async fn list(&self, query: &AdoptionQuery) -> AdoptionBoardResult<Page<Adoption>> {
        let filter = query.to_filter()?;
        let page = PageRequest::new(query.page.unwrap_or(0), self.page_size)?;
        Ok(self.repository.list(&filter, page).await?)
    }

    /// Marks the animal adopted on behalf of the holder of the edit token.
    ///
    /// # Errors
    ///
    /// Returns [`AdoptionBoardError::NotFound`] when the listing does not
    /// exist, [`AdoptionBoardError::InvalidEditToken`] when the token does
    /// not match, and [`AdoptionBoardError::Domain`] when it was already
    /// adopted.
    pub async fn mark_adopted(
        &self,
        id: AdoptionId,
        candidate_token: &str,
    ) -> AdoptionBoardResult<Adoption> {
        let mut adoption = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(AdoptionBoardError::NotFound(id))?;

        if !adoption.is_authorised(candidate_token) {
            warn!(adoption_id = %id, "rejected adoption with mismatched edit token");
            return Err(AdoptionBoardError::InvalidEditToken(id));
        }

        adoption.mark_adopted()?;
        self.repository
            .mark_adopted(id)
            .await
            .map_err(Self::lift_rejection)?;
        info!(adoption_id = %id, "adoption completed");
        Ok(adoption)
    }

    /// Records a community report against a listing.
    ///
    /// # Errors
    ///
    /// Returns [`AdoptionBoardError::NotFound`] when the listing does not
    /// exist and [`AdoptionBoardError::Domain`] when it no longer accepts
    /// reports.
    pub async fn report(&self, id: AdoptionId) -> AdoptionBoardResult<Adoption> {
        let adoption = self
            .repository
            .record_report(id, self.report_threshold)
            .await
            .map_err(Self::lift_rejection)?;

        if adoption.is_contact_hidden() {
            info!(
                adoption_id = %id,
                reports = adoption.reports_count(),
                "adoption contact hidden for community review"
            );
        } else {
            info!(adoption_id = %id, reports = adoption.reports_count(), "adoption reported");
        }
        Ok(adoption)
    }

    fn lift_rejection(err: AdoptionRepositoryError) -> AdoptionBoardError {
        match err {
            AdoptionRepositoryError::NotFound(id) => AdoptionBoardError::NotFound(id),
            AdoptionRepositoryError::Rejected(domain) => AdoptionBoardError::Domain(domain),
            other => AdoptionBoardError::Repository(other),
        }
    }
}
