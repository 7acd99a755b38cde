//! In-memory repository for adoption listings.

use async_trait::async_trait;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::adoption::{
    domain::{Adoption, AdoptionId},
    ports::{
        AdoptionFilter, AdoptionRepository, AdoptionRepositoryError, AdoptionRepositoryResult,
    },
};
use crate::listing::domain::{Page, PageRequest};

/// Thread-safe in-memory adoption repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAdoptionRepository {
    adoptions: Arc<RwLock<HashMap<AdoptionId, Adoption>>>,
}

impl InMemoryAdoptionRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> AdoptionRepositoryError {
    AdoptionRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl AdoptionRepository for InMemoryAdoptionRepository {
    async fn store(&self, adoption: &Adoption) -> AdoptionRepositoryResult<()> {
        let mut adoptions = self.adoptions.write().map_err(lock_error)?;
        if adoptions.contains_key(&adoption.id()) {
            return Err(AdoptionRepositoryError::DuplicateAdoption(adoption.id()));
        }
        adoptions.insert(adoption.id(), adoption.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: AdoptionId) -> AdoptionRepositoryResult<Option<Adoption>> {
        let adoptions = self.adoptions.read().map_err(lock_error)?;
        Ok(adoptions.get(&id).cloned())
    }

    async fn list(
        &self,
        filter: &AdoptionFilter,
        page: PageRequest,
    ) -> AdoptionRepositoryResult<Page<Adoption>> {
        let adoptions = self.adoptions.read().map_err(lock_error)?;
        let mut matching: Vec<&Adoption> = adoptions
            .values()
            .filter(|adoption| filter.matches(adoption))
            .collect();
        matching.sort_by_key(|adoption| Reverse((adoption.created_at(), adoption.id())));

        let skip = usize::try_from(page.offset()).map_err(AdoptionRepositoryError::persistence)?;
        let take =
            usize::try_from(page.probe_limit()).map_err(AdoptionRepositoryError::persistence)?;
        let rows = matching.into_iter().skip(skip).take(take).cloned().collect();
        Ok(Page::from_probe(rows, page))
    }

    async fn mark_adopted(&self, id: AdoptionId) -> AdoptionRepositoryResult<()> {
        let mut adoptions = self.adoptions.write().map_err(lock_error)?;
        let adoption = adoptions
            .get_mut(&id)
            .ok_or(AdoptionRepositoryError::NotFound(id))?;
        adoption
            .mark_adopted()
            .map_err(AdoptionRepositoryError::Rejected)
    }

    async fn record_report(
        &self,
        id: AdoptionId,
        threshold: u32,
    ) -> AdoptionRepositoryResult<Adoption> {
        let mut adoptions = self.adoptions.write().map_err(lock_error)?;
        let adoption = adoptions
            .get_mut(&id)
            .ok_or(AdoptionRepositoryError::NotFound(id))?;
        adoption
            .record_report(threshold)
            .map_err(AdoptionRepositoryError::Rejected)?;
        Ok(adoption.clone())
    }
}
