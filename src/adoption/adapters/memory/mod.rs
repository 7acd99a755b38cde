//! In-memory adapters for adoption listing persistence.

mod adoption;

pub use adoption::InMemoryAdoptionRepository;
