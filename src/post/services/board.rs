//! Service layer for the lost and found board.

use crate::listing::domain::{
    ContactInfo, ContactType, DEFAULT_PAGE_SIZE, Description, EditToken, ImageUrl,
    ListingDomainError, ListingTitle, Page, PageRequest, SearchTerm, Species, Zone, filter_choice,
};
use crate::media::{
    domain::ImageUpload,
    ports::{ImageStore, ImageStoreError},
};
use crate::post::{
    domain::{Post, PostDomainError, PostDraft, PostId, PostStatus},
    ports::{PostFilter, PostRepository, PostRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Raw publisher input for a report, as submitted by the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PostSubmission {
    /// Report headline.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// `lost` or `found`.
    pub status: String,
    /// `dog`, `cat` or `other`.
    pub species: String,
    /// Approximate zone.
    pub zone_text: String,
    /// Event date as `YYYY-MM-DD`.
    pub event_date: String,
    /// `whatsapp`, `email` or `form`.
    pub contact_type: String,
    /// Phone number, e-mail address or free text.
    #[serde(default)]
    pub contact_value: String,
    /// Already uploaded photo URL.
    #[serde(default)]
    pub image_url: Option<String>,
}

impl PostSubmission {
    fn into_draft(self) -> Result<PostDraft, PostDomainError> {
        let contact_type =
            ContactType::try_from(self.contact_type.as_str()).map_err(ListingDomainError::from)?;
        let image_url = self
            .image_url
            .filter(|url| !url.trim().is_empty())
            .map(ImageUrl::new)
            .transpose()?;
        let trimmed_date = self.event_date.trim();
        let event_date = NaiveDate::parse_from_str(trimmed_date, "%Y-%m-%d")
            .map_err(|_| PostDomainError::InvalidEventDate(trimmed_date.to_owned()))?;

        Ok(PostDraft {
            title: ListingTitle::new(&self.title)?,
            description: Description::new(&self.description)?,
            status: PostStatus::try_from(self.status.as_str()).map_err(ListingDomainError::from)?,
            species: Species::try_from(self.species.as_str()).map_err(ListingDomainError::from)?,
            zone: Zone::new(&self.zone_text)?,
            event_date,
            contact: ContactInfo::new(contact_type, &self.contact_value)?,
            image_url,
        })
    }
}

/// Request to publish a report, optionally with a photo to upload.
#[derive(Debug, Clone)]
pub struct PublishPostRequest {
    submission: PostSubmission,
    image: Option<ImageUpload>,
}

impl PublishPostRequest {
    /// Creates a request from form input.
    #[must_use]
    pub const fn new(submission: PostSubmission) -> Self {
        Self {
            submission,
            image: None,
        }
    }

    /// Attaches a photo that is uploaded before the report is stored.
    ///
    /// An uploaded photo replaces any `image_url` in the submission.
    #[must_use]
    pub fn with_image(mut self, image: ImageUpload) -> Self {
        self.image = Some(image);
        self
    }

    /// Sets the URL of an already uploaded photo.
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.submission.image_url = Some(image_url.into());
        self
    }
}

/// Raw listing query, as received from the board's filter bar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PostQuery {
    /// `lost`, `found`, `all` or blank.
    #[serde(default)]
    pub status: Option<String>,
    /// `dog`, `cat`, `other`, `all` or blank.
    #[serde(default)]
    pub species: Option<String>,
    /// Free-text search over title and description.
    #[serde(default)]
    pub q: Option<String>,
    /// Zero-based page index.
    #[serde(default)]
    pub page: Option<u32>,
    /// Whether resolved reports are listed; defaults to `true`.
    #[serde(default)]
    pub include_resolved: Option<bool>,
}

impl PostQuery {
    fn to_filter(&self) -> Result<PostFilter, PostDomainError> {
        let status = filter_choice(self.status.as_deref())
            .map(PostStatus::try_from)
            .transpose()
            .map_err(ListingDomainError::from)?;
        let species = filter_choice(self.species.as_deref())
            .map(Species::try_from)
            .transpose()
            .map_err(ListingDomainError::from)?;
        Ok(PostFilter {
            status,
            species,
            search: self.q.as_deref().and_then(SearchTerm::parse),
            include_resolved: self.include_resolved.unwrap_or(true),
        })
    }
}

/// Result of a successful publication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedPost {
    /// The stored report.
    pub post: Post,
    /// Token the publisher keeps to resolve the report later.
    pub edit_token: EditToken,
}

/// Service-level errors for the lost and found board.
#[derive(Debug, Error)]
pub enum PostBoardError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] PostDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] PostRepositoryError),
    /// The photo upload failed; nothing was stored.
    #[error(transparent)]
    Storage(#[from] ImageStoreError),
    /// The report does not exist.
    #[error("post not found: {0}")]
    NotFound(PostId),
    /// The supplied edit token does not belong to the report.
    #[error("edit token does not match post {0}")]
    InvalidEditToken(PostId),
}

impl From<ListingDomainError> for PostBoardError {
    fn from(err: ListingDomainError) -> Self {
        Self::Domain(PostDomainError::Listing(err))
    }
}

/// Result type for board operations.
pub type PostBoardResult<T> = Result<T, PostBoardError>;

/// Orchestrates report publication, browsing and resolution.
pub struct PostBoardService<R, S, C>
where
    R: PostRepository + ?Sized,
    S: ImageStore + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    images: Arc<S>,
    clock: Arc<C>,
    page_size: u32,
}

impl<R, S, C> PostBoardService<R, S, C>
where
    R: PostRepository + ?Sized,
    S: ImageStore + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a board service listing [`DEFAULT_PAGE_SIZE`] reports per
    /// page.
    #[must_use]
    pub const fn new(repository: Arc<R>, images: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            repository,
            images,
            clock,
            page_size: DEFAULT_PAGE_SIZE,
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

    /// Validates and stores a new report.
    ///
    /// Input is validated before any photo is uploaded. When the upload
    /// fails the report is not stored.
    ///
    /// # Errors
    ///
    /// Returns [`PostBoardError::Domain`] for invalid input,
    /// [`PostBoardError::Storage`] when the upload fails and
    /// [`PostBoardError::Repository`] when persistence fails.
    pub async fn publish(&self, request: PublishPostRequest) -> PostBoardResult<PublishedPost> {
        let PublishPostRequest { submission, image } = request;
        let mut draft = submission.into_draft()?;
        draft.ensure_event_date_not_future(&*self.clock)?;

        if let Some(upload) = image {
            let stored = self.images.put(&upload).await.inspect_err(|err| {
                warn!(error = %err, "photo upload failed, report not published");
            })?;
            draft.image_url = Some(ImageUrl::new(&stored.public_url)?);
        }

        let post = Post::publish(draft, &*self.clock)?;
        self.repository.store(&post).await?;
        info!(post_id = %post.id(), status = %post.status(), "report published");

        let edit_token = post.edit_token().clone();
        Ok(PublishedPost { post, edit_token })
    }

    /// Retrieves a report by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PostBoardError::Repository`] when the lookup fails.
    pub async fn get(&self, id: PostId) -> PostBoardResult<Option<Post>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Returns one page of reports, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`PostBoardError::Domain`] for unknown status or species
    /// values and [`PostBoardError::Repository`] when the query fails.
    pub async fn list(&self, query: &PostQuery) -> PostBoardResult<Page<Post>> {
        let filter = query.to_filter()?;
        let page = PageRequest::new(query.page.unwrap_or(0), self.page_size)?;
        Ok(self.repository.list(&filter, page).await?)
    }

    /// Marks a report resolved on behalf of the holder of its edit token.
    ///
    /// # Errors
    ///
    /// Returns [`PostBoardError::NotFound`] when the report does not exist,
    /// [`PostBoardError::InvalidEditToken`] when `candidate_token` does not
    /// match, and [`PostBoardError::Domain`] when it is already resolved.
    pub async fn resolve(&self, id: PostId, candidate_token: &str) -> PostBoardResult<Post> {
        let mut post = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(PostBoardError::NotFound(id))?;

        if !post.is_authorised(candidate_token) {
            warn!(post_id = %id, "rejected resolve with mismatched edit token");
            return Err(PostBoardError::InvalidEditToken(id));
        }

        post.resolve()?;
        self.repository
            .mark_resolved(id, post.contact())
            .await
            .map_err(Self::lift_rejection)?;
        info!(post_id = %id, "report resolved");
        Ok(post)
    }

    fn lift_rejection(err: PostRepositoryError) -> PostBoardError {
        match err {
            PostRepositoryError::NotFound(id) => PostBoardError::NotFound(id),
            PostRepositoryError::Rejected(domain) => PostBoardError::Domain(domain),
            other => PostBoardError::Repository(other),
        }
    }
}
