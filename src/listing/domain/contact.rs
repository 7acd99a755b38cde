//! Contact channel published with a listing.

use super::{ListingDomainError, ParseListingValueError};
use serde::{Deserialize, Serialize};
use std::fmt;

const MIN_PHONE_DIGITS: usize = 7;
const MAX_PHONE_DIGITS: usize = 15;
/// Width of the `contact_value` column.
const MAX_CONTACT_LENGTH: usize = 255;

/// Channel through which interested people reach the publisher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactType {
    /// WhatsApp chat opened through a `wa.me` link.
    Whatsapp,
    /// Plain email.
    Email,
    /// Contact through the site's own form; no public value required.
    Form,
}

impl ContactType {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Whatsapp => "whatsapp",
            Self::Email => "email",
            Self::Form => "form",
        }
    }
}

impl TryFrom<&str> for ContactType {
    type Error = ParseListingValueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "whatsapp" => Ok(Self::Whatsapp),
            "email" => Ok(Self::Email),
            "form" => Ok(Self::Form),
            _ => Err(ParseListingValueError::new("contact type", value)),
        }
    }
}

impl fmt::Display for ContactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated contact channel and value.
///
/// WhatsApp numbers are normalised to digits only, emails to lowercase. A
/// cleared contact keeps its type but carries an empty value; this is how
/// resolved listings hide the publisher's details.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactInfo {
    contact_type: ContactType,
    value: String,
}

impl ContactInfo {
    /// Validates and normalises a contact value for the given channel.
    ///
    /// # Errors
    ///
    /// Returns [`ListingDomainError::EmptyField`] when a WhatsApp or email
    /// value is blank, [`ListingDomainError::InvalidWhatsApp`] or
    /// [`ListingDomainError::InvalidEmail`] when the value is malformed, and
    /// [`ListingDomainError::FieldTooLong`] when a form note is too long.
    pub fn new(contact_type: ContactType, value: impl AsRef<str>) -> Result<Self, ListingDomainError> {
        let raw = value.as_ref().trim();
        let normalized = match contact_type {
            ContactType::Whatsapp => normalize_whatsapp(raw)?,
            ContactType::Email => normalize_email(raw)?,
            ContactType::Form => normalize_form(raw)?,
        };
        Ok(Self {
            contact_type,
            value: normalized,
        })
    }

    /// Returns a contact of the same channel with the value removed.
    #[must_use]
    pub const fn cleared(contact_type: ContactType) -> Self {
        Self {
            contact_type,
            value: String::new(),
        }
    }

    /// Reconstructs a contact from persisted columns without re-validation.
    #[must_use]
    pub const fn from_persisted(contact_type: ContactType, value: String) -> Self {
        Self {
            contact_type,
            value,
        }
    }

    /// Returns the contact channel.
    #[must_use]
    pub const fn contact_type(&self) -> ContactType {
        self.contact_type
    }

    /// Returns the normalised contact value (empty when cleared).
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns `true` when the contact carries no value.
    #[must_use]
    pub const fn is_cleared(&self) -> bool {
        self.value.is_empty()
    }
}

fn normalize_whatsapp(raw: &str) -> Result<String, ListingDomainError> {
    if raw.is_empty() {
        return Err(ListingDomainError::EmptyField { field: "contact" });
    }
    let body = raw.strip_prefix('+').unwrap_or(raw);
    let mut digits = String::with_capacity(body.len());
    for ch in body.chars() {
        match ch {
            '0'..='9' => digits.push(ch),
            ' ' | '-' | '.' | '(' | ')' => {}
            _ => return Err(ListingDomainError::InvalidWhatsApp(raw.to_owned())),
        }
    }
    if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits.len()) {
        return Err(ListingDomainError::InvalidWhatsApp(raw.to_owned()));
    }
    Ok(digits)
}

fn normalize_email(raw: &str) -> Result<String, ListingDomainError> {
    if raw.is_empty() {
        return Err(ListingDomainError::EmptyField { field: "contact" });
    }
    ensure_contact_length(raw)?;
    let invalid = || ListingDomainError::InvalidEmail(raw.to_owned());
    if raw.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = raw.split_once('@').ok_or_else(invalid)?;
    let domain_ok = domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains('@');
    if local.is_empty() || !domain_ok {
        return Err(invalid());
    }
    Ok(raw.to_lowercase())
}

fn normalize_form(raw: &str) -> Result<String, ListingDomainError> {
    ensure_contact_length(raw)?;
    Ok(raw.to_owned())
}

fn ensure_contact_length(raw: &str) -> Result<(), ListingDomainError> {
    let actual = raw.chars().count();
    if actual > MAX_CONTACT_LENGTH {
        return Err(ListingDomainError::FieldTooLong {
            field: "contact",
            max: MAX_CONTACT_LENGTH,
            actual,
        });
    }
    Ok(())
}
