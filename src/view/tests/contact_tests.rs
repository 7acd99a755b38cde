//! Tests for contact link construction.

use crate::listing::domain::{ContactInfo, ContactType};
use crate::view::ContactLink;
use rstest::rstest;

#[rstest]
#[case::whatsapp(ContactType::Whatsapp, "+54 9 11 1234-5678", Some("https://wa.me/5491112345678"))]
#[case::email(ContactType::Email, "Hola@Refugio.org", Some("mailto:hola@refugio.org"))]
#[case::form(ContactType::Form, "Dejar mensaje", None)]
fn links_follow_the_channel(
    #[case] contact_type: ContactType,
    #[case] raw: &str,
    #[case] expected_href: Option<&str>,
) {
    let contact = ContactInfo::new(contact_type, raw).expect("valid contact");
    let link = ContactLink::for_contact(&contact).expect("contact has a value");

    assert_eq!(link.contact_type, contact_type);
    assert_eq!(link.href.as_deref(), expected_href);
}

#[rstest]
fn cleared_contacts_have_no_link() {
    assert_eq!(ContactLink::for_contact(&ContactInfo::cleared(ContactType::Email)), None);
}
