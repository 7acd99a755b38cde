//! Object storage port for listing photos.

use crate::media::domain::{ImageKey, ImageUpload, StoredImage, StoredObject};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for image store operations.
pub type ImageStoreResult<T> = Result<T, ImageStoreError>;

/// Image persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Stores an upload under a fresh key and returns its public URL.
    ///
    /// # Errors
    ///
    /// Returns [`ImageStoreError::Storage`] when the backend rejects the write.
    async fn put(&self, upload: &ImageUpload) -> ImageStoreResult<StoredImage>;

    /// Reads a stored image back.
    ///
    /// Returns `None` when no object exists under the key.
    async fn get(&self, key: &ImageKey) -> ImageStoreResult<Option<StoredObject>>;
}

/// Errors returned by image store implementations.
#[derive(Debug, Clone, Error)]
pub enum ImageStoreError {
    /// Storage-layer failure.
    #[error("image storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl ImageStoreError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
