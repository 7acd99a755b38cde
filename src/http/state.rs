//! Shared handler state.

use crate::adoption::{ports::AdoptionRepository, services::AdoptionBoardService};
use crate::config::AppConfig;
use crate::listing::domain::ListingDomainError;
use crate::media::ports::ImageStore;
use crate::post::{ports::PostRepository, services::PostBoardService};
use crate::view::{ShareLinks, ViewError};
use mockable::{Clock, DefaultClock};
use std::sync::Arc;
use thiserror::Error;

/// Report board as wired into the HTTP layer.
pub type PostBoard = PostBoardService<dyn PostRepository, dyn ImageStore, DefaultClock>;

/// Adoption board as wired into the HTTP layer.
pub type AdoptionBoard = AdoptionBoardService<dyn AdoptionRepository, dyn ImageStore, DefaultClock>;

/// Storage backends the HTTP layer runs on.
#[derive(Clone)]
pub struct Backends {
    /// Report persistence.
    pub posts: Arc<dyn PostRepository>,
    /// Adoption persistence.
    pub adoptions: Arc<dyn AdoptionRepository>,
    /// Photo storage.
    pub images: Arc<dyn ImageStore>,
}

/// Errors raised while assembling [`AppState`].
#[derive(Debug, Error)]
pub enum StateError {
    /// The configured page size was rejected.
    #[error(transparent)]
    PageSize(#[from] ListingDomainError),
    /// The share link renderer could not be built.
    #[error(transparent)]
    ShareLinks(#[from] ViewError),
}

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Lost and found board.
    pub posts: Arc<PostBoard>,
    /// Adoption board.
    pub adoptions: Arc<AdoptionBoard>,
    /// Photo storage, for uploads and downloads.
    pub images: Arc<dyn ImageStore>,
    /// Share link renderer.
    pub share_links: Arc<ShareLinks>,
    /// Largest accepted photo upload in bytes.
    pub max_image_bytes: usize,
    clock: Arc<DefaultClock>,
}

impl AppState {
    /// Wires the boards over `backends` using `config`.
    ///
    /// # Errors
    ///
    /// Returns [`StateError`] when the page size or public URL is unusable.
    pub fn new(backends: Backends, config: &AppConfig) -> Result<Self, StateError> {
        let clock = Arc::new(DefaultClock);
        let posts = PostBoardService::new(
            backends.posts,
            Arc::clone(&backends.images),
            Arc::clone(&clock),
        )
        .with_page_size(config.page_size)?;
        let adoptions = AdoptionBoardService::new(
            backends.adoptions,
            Arc::clone(&backends.images),
            Arc::clone(&clock),
        )
        .with_page_size(config.page_size)?
        .with_report_threshold(config.report_threshold);

        Ok(Self {
            posts: Arc::new(posts),
            adoptions: Arc::new(adoptions),
            images: backends.images,
            share_links: Arc::new(ShareLinks::new(config.public_url.clone())?),
            max_image_bytes: config.max_image_bytes,
            clock,
        })
    }

    /// Returns the current instant, used for relative dates in views.
    #[must_use]
    pub fn now(&self) -> chrono::DateTime<chrono::Utc> {
        self.clock.utc()
    }
}
