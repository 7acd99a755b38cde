//! Repository port for adoption listing persistence and community reports.

use crate::adoption::domain::{Adoption, AdoptionDomainError, AdoptionId, AdoptionStatus};
use crate::listing::domain::{Page, PageRequest, SearchTerm, Species};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for adoption repository operations.
pub type AdoptionRepositoryResult<T> = Result<T, AdoptionRepositoryError>;

/// Criteria for listing adoptions. Unset fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdoptionFilter {
    /// Only listings with this status.
    pub status: Option<AdoptionStatus>,
    /// Only listings for this species.
    pub species: Option<Species>,
    /// Only listings whose name or description contains the term.
    pub search: Option<SearchTerm>,
}

impl AdoptionFilter {
    /// Returns `true` when `adoption` satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, adoption: &Adoption) -> bool {
        self.status.is_none_or(|status| adoption.status() == status)
            && self.species.is_none_or(|species| adoption.species() == species)
            && self.search.as_ref().is_none_or(|term| {
                term.matches(adoption.name().as_str(), adoption.description().as_str())
            })
    }
}

/// Adoption listing persistence contract.
#[async_trait]
pub trait AdoptionRepository: Send + Sync {
    /// Stores a new listing.
    ///
    /// # Errors
    ///
    /// Returns [`AdoptionRepositoryError::DuplicateAdoption`] when the
    /// identifier already exists.
    async fn store(&self, adoption: &Adoption) -> AdoptionRepositoryResult<()>;

    /// Finds a listing by identifier.
    ///
    /// Returns `None` when the listing does not exist.
    async fn find_by_id(&self, id: AdoptionId) -> AdoptionRepositoryResult<Option<Adoption>>;

    /// Returns one page of listings matching `filter`, newest first.
    async fn list(
        &self,
        filter: &AdoptionFilter,
        page: PageRequest,
    ) -> AdoptionRepositoryResult<Page<Adoption>>;

    /// Sets the status to adopted.
    ///
    /// # Errors
    ///
    /// Returns [`AdoptionRepositoryError::NotFound`] when the listing does
    /// not exist.
    async fn mark_adopted(&self, id: AdoptionId) -> AdoptionRepositoryResult<()>;

    /// Atomically records one community report and returns the updated
    /// listing. The contact is hidden once the count reaches `threshold`.
    ///
    /// # Errors
    ///
    /// Returns [`AdoptionRepositoryError::NotFound`] when the listing does
    /// not exist and [`AdoptionRepositoryError::Rejected`] when it no longer
    /// accepts reports.
    async fn record_report(
        &self,
        id: AdoptionId,
        threshold: u32,
    ) -> AdoptionRepositoryResult<Adoption>;
}

/// Errors returned by adoption repository implementations.
#[derive(Debug, Clone, Error)]
pub enum AdoptionRepositoryError {
    /// A listing with the same identifier already exists.
    #[error("duplicate adoption identifier: {0}")]
    DuplicateAdoption(AdoptionId),

    /// The listing was not found.
    #[error("adoption not found: {0}")]
    NotFound(AdoptionId),

    /// The stored listing refused the change.
    #[error(transparent)]
    Rejected(AdoptionDomainError),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AdoptionRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
