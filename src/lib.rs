//! Mi Amigo Fiel: a community bulletin board for pets.
//!
//! Neighbours publish lost and found reports and adoption listings, browse
//! them with filters, and share them. Publishing needs no account: the
//! publisher receives an edit token that later proves authorship when the
//! report is resolved or the animal adopted.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, files, memory)
//!
//! # Modules
//!
//! - [`listing`]: Vocabulary shared by both boards (species, contact, paging)
//! - [`post`]: Lost and found reports
//! - [`adoption`]: Adoption listings with community moderation
//! - [`media`]: Photo uploads
//! - [`vault`]: Client-side edit token storage
//! - [`view`]: Presentation models for cards and detail pages
//! - [`http`]: JSON API over both boards

pub mod adoption;
pub mod config;
pub mod db;
pub mod http;
pub mod listing;
pub mod media;
pub mod post;
pub mod telemetry;
pub mod vault;
pub mod view;

#[cfg(test)]
mod test_support;
