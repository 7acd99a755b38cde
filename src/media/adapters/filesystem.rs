//! Filesystem image store confined to a capability directory.

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::{self, Write};
use std::sync::Arc;

use crate::media::{
    domain::{ImageKey, ImageUpload, StoredImage, StoredObject},
    ports::{ImageStore, ImageStoreError, ImageStoreResult},
};

/// Image store writing one file per object below a root directory.
///
/// All file access goes through a [`Dir`] handle, so keys can never escape
/// the root even if validation upstream were bypassed.
#[derive(Debug, Clone)]
pub struct FilesystemImageStore {
    root: Arc<Dir>,
    public_base_url: String,
}

impl FilesystemImageStore {
    /// Opens (creating if needed) the media directory at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ImageStoreError::Storage`] when the directory cannot be
    /// created or opened.
    pub fn open(path: &Utf8Path, public_base_url: impl Into<String>) -> ImageStoreResult<Self> {
        let (parent, name) = match (path.parent(), path.file_name()) {
            (Some(parent), Some(name)) if !parent.as_str().is_empty() => (parent, name),
            (_, Some(name)) => (Utf8Path::new("."), name),
            _ => (path, "."),
        };
        let parent_dir =
            Dir::open_ambient_dir(parent, ambient_authority()).map_err(ImageStoreError::storage)?;
        parent_dir
            .create_dir_all(name)
            .map_err(ImageStoreError::storage)?;
        let root = parent_dir.open_dir(name).map_err(ImageStoreError::storage)?;
        Ok(Self {
            root: Arc::new(root),
            public_base_url: public_base_url.into(),
        })
    }

    async fn run_blocking<F, T>(&self, f: F) -> ImageStoreResult<T>
    where
        F: FnOnce(&Dir) -> io::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let root = Arc::clone(&self.root);
        tokio::task::spawn_blocking(move || f(&root))
            .await
            .map_err(ImageStoreError::storage)?
            .map_err(ImageStoreError::storage)
    }
}

#[async_trait]
impl ImageStore for FilesystemImageStore {
    async fn put(&self, upload: &ImageUpload) -> ImageStoreResult<StoredImage> {
        let key = ImageKey::generate(upload.format());
        let file_name = key.as_str().to_owned();
        let bytes = upload.bytes().to_vec();
        self.run_blocking(move |root| {
            let mut file = root.create(&file_name)?;
            file.write_all(&bytes)?;
            file.sync_all()
        })
        .await?;
        let public_url = public_url(&self.public_base_url, &key);
        Ok(StoredImage { key, public_url })
    }

    async fn get(&self, key: &ImageKey) -> ImageStoreResult<Option<StoredObject>> {
        let Some(format) = key.format() else {
            return Ok(None);
        };
        let file_name = key.as_str().to_owned();
        let bytes = self
            .run_blocking(move |root| match root.read(&file_name) {
                Ok(bytes) => Ok(Some(bytes)),
                Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
                Err(err) => Err(err),
            })
            .await?;
        Ok(bytes.map(|data| StoredObject {
            content_type: format.content_type(),
            bytes: data,
        }))
    }
}

/// Builds the public URL under which the HTTP surface serves `key`.
pub(crate) fn public_url(base_url: &str, key: &ImageKey) -> String {
    format!("{}/media/{key}", base_url.trim_end_matches('/'))
}
