//! Errors raised while building views.

use thiserror::Error;

/// Errors returned by view builders.
#[derive(Debug, Error)]
pub enum ViewError {
    /// The share link template failed to render.
    #[error("share link rendering failed: {0}")]
    ShareTemplate(#[from] minijinja::Error),
}
