//! Clickable contact links.

use crate::listing::domain::{ContactInfo, ContactType};
use serde::Serialize;

/// How a visitor reaches the publisher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactLink {
    /// Channel of the contact.
    pub contact_type: ContactType,
    /// Text shown to the visitor.
    pub label: String,
    /// `https://wa.me/<digits>` or `mailto:<address>`; absent for form
    /// contacts, which have nothing to link to.
    pub href: Option<String>,
}

impl ContactLink {
    /// Builds the link for `contact`, or `None` when the value was cleared.
    #[must_use]
    pub fn for_contact(contact: &ContactInfo) -> Option<Self> {
        if contact.is_cleared() {
            return None;
        }
        let value = contact.value();
        let href = match contact.contact_type() {
            ContactType::Whatsapp => Some(format!("https://wa.me/{value}")),
            ContactType::Email => Some(format!("mailto:{value}")),
            ContactType::Form => None,
        };
        Some(Self {
            contact_type: contact.contact_type(),
            label: value.to_owned(),
            href,
        })
    }
}
