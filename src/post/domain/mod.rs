//! Domain model for lost and found reports.
//!
//! Validation of publisher input and the resolve transition live here; the
//! storage and transport layers only move validated values around.

mod error;
mod ids;
mod post;

pub use error::PostDomainError;
pub use ids::PostId;
pub use post::{PersistedPostData, Post, PostDraft, PostStatus};
