//! Port contracts for report persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by report services.

pub mod repository;

pub use repository::{PostFilter, PostRepository, PostRepositoryError, PostRepositoryResult};
