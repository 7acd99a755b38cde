//! Token vault port.

use crate::listing::domain::EditToken;
use crate::vault::domain::TokenKey;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for token vault operations.
pub type TokenVaultResult<T> = Result<T, TokenVaultError>;

/// Key-value storage for the publisher's own edit tokens.
#[async_trait]
pub trait TokenVault: Send + Sync {
    /// Stores `token` under `key`, replacing any previous value.
    async fn remember(&self, key: TokenKey, token: &EditToken) -> TokenVaultResult<()>;

    /// Returns the token stored under `key`, if any.
    async fn recall(&self, key: TokenKey) -> TokenVaultResult<Option<EditToken>>;

    /// Removes the token stored under `key`. Missing keys are ignored.
    async fn forget(&self, key: TokenKey) -> TokenVaultResult<()>;
}

/// Errors returned by token vault implementations.
#[derive(Debug, Clone, Error)]
pub enum TokenVaultError {
    /// The stored data could not be read or written.
    #[error("token vault storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl TokenVaultError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
