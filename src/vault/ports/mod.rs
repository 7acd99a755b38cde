//! Port contracts for publisher-side token storage.

pub mod vault;

pub use vault::{TokenVault, TokenVaultError, TokenVaultResult};
