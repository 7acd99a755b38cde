//! Repository port for report persistence, filtering and resolution.

use crate::listing::domain::{ContactInfo, Page, PageRequest, SearchTerm, Species};
use crate::post::domain::{Post, PostDomainError, PostId, PostStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for report repository operations.
pub type PostRepositoryResult<T> = Result<T, PostRepositoryError>;

/// Criteria for listing reports. Unset fields do not filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFilter {
    /// Only reports with this status.
    pub status: Option<PostStatus>,
    /// Only reports about this species.
    pub species: Option<Species>,
    /// Only reports whose title or description contains the term.
    pub search: Option<SearchTerm>,
    /// Whether resolved reports are included.
    pub include_resolved: bool,
}

impl Default for PostFilter {
    fn default() -> Self {
        Self {
            status: None,
            species: None,
            search: None,
            include_resolved: true,
        }
    }
}

impl PostFilter {
    /// Returns `true` when `post` satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, post: &Post) -> bool {
        self.status.is_none_or(|status| post.status() == status)
            && self.species.is_none_or(|species| post.species() == species)
            && (self.include_resolved || !post.is_resolved())
            && self.search.as_ref().is_none_or(|term| {
                term.matches(post.title().as_str(), post.description().as_str())
            })
    }
}

/// Report persistence contract.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Stores a new report.
    ///
    /// # Errors
    ///
    /// Returns [`PostRepositoryError::DuplicatePost`] when the identifier
    /// already exists.
    async fn store(&self, post: &Post) -> PostRepositoryResult<()>;

    /// Finds a report by identifier.
    ///
    /// Returns `None` when the report does not exist.
    async fn find_by_id(&self, id: PostId) -> PostRepositoryResult<Option<Post>>;

    /// Returns one page of reports matching `filter`, newest first.
    ///
    /// Ties on `created_at` are broken by descending identifier so pages are
    /// stable.
    async fn list(
        &self,
        filter: &PostFilter,
        page: PageRequest,
    ) -> PostRepositoryResult<Page<Post>>;

    /// Sets the resolved flag and replaces the contact with `cleared_contact`,
    /// provided the report is still open.
    ///
    /// # Errors
    ///
    /// Returns [`PostRepositoryError::NotFound`] when the report does not
    /// exist and [`PostRepositoryError::Rejected`] with
    /// [`PostDomainError::AlreadyResolved`] when it was resolved already.
    async fn mark_resolved(
        &self,
        id: PostId,
        cleared_contact: &ContactInfo,
    ) -> PostRepositoryResult<()>;
}

/// Errors returned by report repository implementations.
#[derive(Debug, Clone, Error)]
pub enum PostRepositoryError {
    /// A report with the same identifier already exists.
    #[error("duplicate post identifier: {0}")]
    DuplicatePost(PostId),

    /// The report was not found.
    #[error("post not found: {0}")]
    NotFound(PostId),

    /// The stored report does not allow the change.
    #[error(transparent)]
    Rejected(PostDomainError),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl PostRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
