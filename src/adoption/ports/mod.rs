//! Port contracts for adoption listing persistence.

pub mod repository;

pub use repository::{
    AdoptionFilter, AdoptionRepository, AdoptionRepositoryError, AdoptionRepositoryResult,
};
