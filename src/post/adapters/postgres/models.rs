//! Diesel row models for report persistence.

use super::schema::posts;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// Query result row for report records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = posts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PostRow {
    /// Report identifier.
    pub id: uuid::Uuid,
    /// Report headline.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Status string.
    pub status: String,
    /// Species string.
    pub species: String,
    /// Zone text.
    pub zone_text: String,
    /// Event date.
    pub event_date: NaiveDate,
    /// Contact type string.
    pub contact_type: String,
    /// Contact value.
    pub contact_value: String,
    /// Optional photo URL.
    pub image_url: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Resolved flag.
    pub resolved: bool,
    /// Edit token.
    pub edit_token: String,
}

/// Insert model for report records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = posts)]
pub struct NewPostRow {
    /// Report identifier.
    pub id: uuid::Uuid,
    /// Report headline.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Status string.
    pub status: String,
    /// Species string.
    pub species: String,
    /// Zone text.
    pub zone_text: String,
    /// Event date.
    pub event_date: NaiveDate,
    /// Contact type string.
    pub contact_type: String,
    /// Contact value.
    pub contact_value: String,
    /// Optional photo URL.
    pub image_url: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Resolved flag.
    pub resolved: bool,
    /// Edit token.
    pub edit_token: String,
}
