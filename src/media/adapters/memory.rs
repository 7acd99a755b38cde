//! In-memory image store for tests and ephemeral deployments.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::media::{
    domain::{ImageKey, ImageUpload, StoredImage, StoredObject},
    ports::{ImageStore, ImageStoreError, ImageStoreResult},
};

/// Thread-safe in-memory image store.
#[derive(Debug, Clone)]
pub struct InMemoryImageStore {
    public_base_url: String,
    objects: Arc<RwLock<HashMap<ImageKey, StoredObject>>>,
}

impl InMemoryImageStore {
    /// Creates an empty store whose URLs are rooted at `public_base_url`.
    #[must_use]
    pub fn new(public_base_url: impl Into<String>) -> Self {
        Self {
            public_base_url: public_base_url.into(),
            objects: Arc::default(),
        }
    }

    /// Returns the number of stored objects.
    ///
    /// # Errors
    ///
    /// Returns [`ImageStoreError::Storage`] when lock acquisition fails.
    pub fn len(&self) -> ImageStoreResult<usize> {
        let objects = self
            .objects
            .read()
            .map_err(|err| ImageStoreError::storage(std::io::Error::other(err.to_string())))?;
        Ok(objects.len())
    }
}

#[async_trait]
impl ImageStore for InMemoryImageStore {
    async fn put(&self, upload: &ImageUpload) -> ImageStoreResult<StoredImage> {
        let key = ImageKey::generate(upload.format());
        let object = StoredObject {
            content_type: upload.format().content_type(),
            bytes: upload.bytes().to_vec(),
        };
        let mut objects = self
            .objects
            .write()
            .map_err(|err| ImageStoreError::storage(std::io::Error::other(err.to_string())))?;
        objects.insert(key.clone(), object);
        let public_url = super::filesystem::public_url(&self.public_base_url, &key);
        Ok(StoredImage { key, public_url })
    }

    async fn get(&self, key: &ImageKey) -> ImageStoreResult<Option<StoredObject>> {
        let objects = self
            .objects
            .read()
            .map_err(|err| ImageStoreError::storage(std::io::Error::other(err.to_string())))?;
        Ok(objects.get(key).cloned())
    }
}
