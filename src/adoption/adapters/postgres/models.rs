//! Diesel row models for adoption listing persistence.

use super::schema::adoptions;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for adoption records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = adoptions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AdoptionRow {
    /// Listing identifier.
    pub id: uuid::Uuid,
    /// Name of the animal.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Status string.
    pub status: String,
    /// Species string.
    pub species: String,
    /// Zone text.
    pub zone_text: String,
    /// Contact type string.
    pub contact_type: String,
    /// Contact value.
    pub contact_value: String,
    /// Optional photo URL.
    pub image_url: Option<String>,
    /// Review flag.
    pub contact_hidden: bool,
    /// Report count.
    pub reports_count: i32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Edit token.
    pub edit_token: String,
}

/// Insert model for adoption records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = adoptions)]
pub struct NewAdoptionRow {
    /// Listing identifier.
    pub id: uuid::Uuid,
    /// Name of the animal.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Status string.
    pub status: String,
    /// Species string.
    pub species: String,
    /// Zone text.
    pub zone_text: String,
    /// Contact type string.
    pub contact_type: String,
    /// Contact value.
    pub contact_value: String,
    /// Optional photo URL.
    pub image_url: Option<String>,
    /// Review flag.
    pub contact_hidden: bool,
    /// Report count.
    pub reports_count: i32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Edit token.
    pub edit_token: String,
}
