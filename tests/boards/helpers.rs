//! Shared fixtures for board integration tests.

use amigo_fiel::{
    adoption::{
        adapters::memory::InMemoryAdoptionRepository,
        services::{AdoptionBoardService, AdoptionSubmission},
    },
    media::adapters::memory::InMemoryImageStore,
    post::{
        adapters::memory::InMemoryPostRepository,
        services::{PostBoardService, PostSubmission},
    },
    vault::adapters::memory::InMemoryTokenVault,
};
use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;

/// Report board over in-memory adapters.
pub type ReportBoard = PostBoardService<InMemoryPostRepository, InMemoryImageStore, DefaultClock>;

/// Adoption board over in-memory adapters.
pub type AdoptionBoard =
    AdoptionBoardService<InMemoryAdoptionRepository, InMemoryImageStore, DefaultClock>;

/// Provides a report board with a page size of three.
#[fixture]
pub fn report_board() -> ReportBoard {
    PostBoardService::new(
        Arc::new(InMemoryPostRepository::new()),
        Arc::new(InMemoryImageStore::new("http://localhost:8080")),
        Arc::new(DefaultClock),
    )
    .with_page_size(3)
    .unwrap_or_else(|err| panic!("page size 3 is valid: {err}"))
}

/// Provides an adoption board hiding contacts after two reports.
#[fixture]
pub fn adoption_board() -> AdoptionBoard {
    AdoptionBoardService::new(
        Arc::new(InMemoryAdoptionRepository::new()),
        Arc::new(InMemoryImageStore::new("http://localhost:8080")),
        Arc::new(DefaultClock),
    )
    .with_report_threshold(2)
}

/// Provides an empty publisher-side token vault.
#[fixture]
pub fn vault() -> InMemoryTokenVault {
    InMemoryTokenVault::new()
}

/// Builds a valid report submission.
pub fn report(title: &str, status: &str, species: &str) -> PostSubmission {
    PostSubmission {
        title: title.to_owned(),
        description: "Lleva collar azul con chapita".to_owned(),
        status: status.to_owned(),
        species: species.to_owned(),
        zone_text: "Barrio Norte".to_owned(),
        event_date: "2024-11-20".to_owned(),
        contact_type: "email".to_owned(),
        contact_value: "vecina@example.org".to_owned(),
        image_url: None,
    }
}

/// Builds a valid adoption submission.
pub fn listing(name: &str, species: &str) -> AdoptionSubmission {
    AdoptionSubmission {
        name: name.to_owned(),
        description: "Castrado, sociable con otros animales".to_owned(),
        species: species.to_owned(),
        zone_text: "Caballito".to_owned(),
        contact_type: "whatsapp".to_owned(),
        contact_value: "+54 11 4444 1234".to_owned(),
        image_url: None,
    }
}
