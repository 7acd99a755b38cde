//! `PostgreSQL` adapters for adoption listing persistence.

pub(crate) mod models;
mod repository;
mod schema;

pub use repository::PostgresAdoptionRepository;
pub(crate) use repository::{row_to_adoption, to_new_row};
