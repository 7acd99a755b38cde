//! Domain model for adoption listings.

mod adoption;
mod error;
mod ids;

pub use adoption::{
    Adoption, AdoptionDraft, AdoptionStatus, DEFAULT_REPORT_THRESHOLD, PersistedAdoptionData,
};
pub use error::AdoptionDomainError;
pub use ids::AdoptionId;
