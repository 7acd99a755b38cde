//! `PostgreSQL` adapters for report persistence.

pub(crate) mod models;
mod repository;
mod schema;

pub use repository::PostgresPostRepository;
pub(crate) use repository::{row_to_post, to_new_row};
