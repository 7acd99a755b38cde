//! Tests for adoption state changes and community reports.

use crate::adoption::domain::{Adoption, AdoptionDomainError, AdoptionDraft, AdoptionStatus};
use crate::listing::domain::{
    ContactInfo, ContactType, Description, EditToken, ListingTitle, Species, Zone,
};
use crate::test_support::FixedClock;
use rstest::{fixture, rstest};

#[fixture]
fn adoption() -> Adoption {
    let draft = AdoptionDraft {
        name: ListingTitle::new("Toby").expect("valid name"),
        description: Description::new("Cachorro juguetón, vacunado").expect("valid description"),
        species: Species::Dog,
        zone: Zone::new("Villa Crespo").expect("valid zone"),
        contact: ContactInfo::new(ContactType::Form, "Escribir por el formulario")
            .expect("valid contact"),
        image_url: None,
    };
    Adoption::publish(draft, &FixedClock::at_noon(2025, 4, 1))
}

#[rstest]
fn new_listing_is_available_and_visible(adoption: Adoption) {
    assert_eq!(adoption.status(), AdoptionStatus::Available);
    assert_eq!(adoption.reports_count(), 0);
    assert!(adoption.contact_visible());
    assert!(adoption.can_report());
}

#[rstest]
fn adopting_twice_is_rejected(mut adoption: Adoption) {
    adoption.mark_adopted().expect("first adoption succeeds");

    assert!(!adoption.contact_visible());
    assert_eq!(
        adoption.mark_adopted(),
        Err(AdoptionDomainError::AlreadyAdopted(adoption.id()))
    );
}

#[rstest]
fn contact_is_hidden_once_threshold_is_reached(mut adoption: Adoption) {
    adoption.record_report(3).expect("first report");
    adoption.record_report(3).expect("second report");
    assert!(adoption.contact_visible());

    adoption.record_report(3).expect("third report");

    assert_eq!(adoption.reports_count(), 3);
    assert!(adoption.is_contact_hidden());
    assert!(!adoption.contact_visible());
}

#[rstest]
fn listings_under_review_reject_further_reports(mut adoption: Adoption) {
    adoption.record_report(1).expect("first report hides contact");

    assert!(!adoption.can_report());
    assert_eq!(
        adoption.record_report(1),
        Err(AdoptionDomainError::UnderReview(adoption.id()))
    );
    assert_eq!(adoption.reports_count(), 1);
}

#[rstest]
fn adopted_listings_reject_reports(mut adoption: Adoption) {
    adoption.mark_adopted().expect("adoption succeeds");

    assert_eq!(
        adoption.record_report(3),
        Err(AdoptionDomainError::ReportNotAllowed(adoption.id()))
    );
}

#[rstest]
fn only_the_token_holder_can_mark_adopted(mut adoption: Adoption) {
    let token = adoption.edit_token().clone();

    assert!(adoption.can_mark_adopted(Some(&token)));
    assert!(!adoption.can_mark_adopted(Some(&EditToken::generate())));
    assert!(!adoption.can_mark_adopted(None));

    adoption.mark_adopted().expect("adoption succeeds");
    assert!(!adoption.can_mark_adopted(Some(&token)));
}

#[rstest]
fn status_labels_are_spanish() {
    assert_eq!(AdoptionStatus::Available.label(), "Disponible");
    assert_eq!(AdoptionStatus::Adopted.label(), "Adoptado");
}
