//! Listing vocabulary shared by lost/found reports and adoption listings.
//!
//! Both listing kinds carry the same building blocks: a species, a contact
//! channel, a free-text zone, an edit token proving authorship, and the same
//! search and pagination semantics. Keeping them here lets the [`crate::post`]
//! and [`crate::adoption`] modules validate input identically.

pub mod domain;

#[cfg(test)]
mod tests;
