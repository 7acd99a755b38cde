//! Token vault persisted as a flat JSON object on disk.

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::collections::BTreeMap;
use std::io;
use std::sync::{Arc, Mutex};

use crate::listing::domain::EditToken;
use crate::vault::{
    domain::TokenKey,
    ports::{TokenVault, TokenVaultError, TokenVaultResult},
};

/// Token vault stored as `{"edit_token_<id>": "<token>", ...}`.
///
/// Every operation re-reads the file, so several processes sharing the file
/// see each other's writes; within one process writes are serialised.
#[derive(Debug, Clone)]
pub struct JsonFileTokenVault {
    dir: Arc<Dir>,
    file_name: String,
    write_lock: Arc<Mutex<()>>,
}

type Entries = BTreeMap<String, String>;

impl JsonFileTokenVault {
    /// Opens a vault stored in `file_name` inside the existing directory `dir`.
    ///
    /// The file is created lazily on first write.
    ///
    /// # Errors
    ///
    /// Returns [`TokenVaultError::Storage`] when the directory cannot be opened.
    pub fn open(dir: &Utf8Path, file_name: impl Into<String>) -> TokenVaultResult<Self> {
        let handle =
            Dir::open_ambient_dir(dir, ambient_authority()).map_err(TokenVaultError::storage)?;
        Ok(Self {
            dir: Arc::new(handle),
            file_name: file_name.into(),
            write_lock: Arc::new(Mutex::new(())),
        })
    }

    async fn with_entries<F, T>(&self, f: F) -> TokenVaultResult<T>
    where
        F: FnOnce(&mut Entries) -> (T, bool) + Send + 'static,
        T: Send + 'static,
    {
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        let lock = Arc::clone(&self.write_lock);
        tokio::task::spawn_blocking(move || {
            let _guard = lock
                .lock()
                .map_err(|err| TokenVaultError::storage(io::Error::other(err.to_string())))?;
            let mut entries = read_entries(&dir, &file_name)?;
            let (result, dirty) = f(&mut entries);
            if dirty {
                write_entries(&dir, &file_name, &entries)?;
            }
            Ok(result)
        })
        .await
        .map_err(TokenVaultError::storage)?
    }
}

fn read_entries(dir: &Dir, file_name: &str) -> TokenVaultResult<Entries> {
    match dir.read_to_string(file_name) {
        Ok(contents) if contents.trim().is_empty() => Ok(Entries::new()),
        Ok(contents) => serde_json::from_str(&contents).map_err(TokenVaultError::storage),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Entries::new()),
        Err(err) => Err(TokenVaultError::storage(err)),
    }
}

fn write_entries(dir: &Dir, file_name: &str, entries: &Entries) -> TokenVaultResult<()> {
    let contents = serde_json::to_string_pretty(entries).map_err(TokenVaultError::storage)?;
    dir.write(file_name, contents).map_err(TokenVaultError::storage)
}

#[async_trait]
impl TokenVault for JsonFileTokenVault {
    async fn remember(&self, key: TokenKey, token: &EditToken) -> TokenVaultResult<()> {
        let name = key.to_string();
        let value = token.expose().to_owned();
        self.with_entries(move |entries| {
            entries.insert(name, value);
            ((), true)
        })
        .await
    }

    async fn recall(&self, key: TokenKey) -> TokenVaultResult<Option<EditToken>> {
        let name = key.to_string();
        let raw = self
            .with_entries(move |entries| (entries.get(&name).cloned(), false))
            .await?;
        // Blank entries behave as if the key were absent.
        Ok(raw.and_then(|value| EditToken::parse(value).ok()))
    }

    async fn forget(&self, key: TokenKey) -> TokenVaultResult<()> {
        let name = key.to_string();
        self.with_entries(move |entries| {
            let removed = entries.remove(&name).is_some();
            ((), removed)
        })
        .await
    }
}
