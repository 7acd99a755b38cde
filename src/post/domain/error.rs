//! Error types for report validation and state changes.

use super::PostId;
use crate::listing::domain::ListingDomainError;
use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned while constructing or changing a report.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostDomainError {
    /// A shared listing field failed validation.
    #[error(transparent)]
    Listing(#[from] ListingDomainError),

    /// The event date is not a `YYYY-MM-DD` calendar date.
    #[error("invalid event date: {0}")]
    InvalidEventDate(String),

    /// The event date lies after the current date.
    #[error("event date {event_date} is in the future (today is {today})")]
    FutureEventDate {
        /// Date supplied by the publisher.
        event_date: NaiveDate,
        /// Current date according to the clock.
        today: NaiveDate,
    },

    /// The report was already marked resolved.
    #[error("post {0} is already resolved")]
    AlreadyResolved(PostId),
}
