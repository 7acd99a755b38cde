//! In-memory token vault.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::listing::domain::EditToken;
use crate::vault::{
    domain::TokenKey,
    ports::{TokenVault, TokenVaultError, TokenVaultResult},
};

/// Thread-safe in-memory token vault keyed by the storage key string.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTokenVault {
    entries: Arc<RwLock<HashMap<String, EditToken>>>,
}

impl InMemoryTokenVault {
    /// Creates an empty vault.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenVault for InMemoryTokenVault {
    async fn remember(&self, key: TokenKey, token: &EditToken) -> TokenVaultResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|err| TokenVaultError::storage(std::io::Error::other(err.to_string())))?;
        entries.insert(key.to_string(), token.clone());
        Ok(())
    }

    async fn recall(&self, key: TokenKey) -> TokenVaultResult<Option<EditToken>> {
        let entries = self
            .entries
            .read()
            .map_err(|err| TokenVaultError::storage(std::io::Error::other(err.to_string())))?;
        Ok(entries.get(&key.to_string()).cloned())
    }

    async fn forget(&self, key: TokenKey) -> TokenVaultResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|err| TokenVaultError::storage(std::io::Error::other(err.to_string())))?;
        entries.remove(&key.to_string());
        Ok(())
    }
}
