//! Error types for adoption listing validation and state changes.

use super::AdoptionId;
use crate::listing::domain::ListingDomainError;
use thiserror::Error;

/// Errors returned while constructing or changing an adoption listing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AdoptionDomainError {
    /// A shared listing field failed validation.
    #[error(transparent)]
    Listing(#[from] ListingDomainError),

    /// The animal was already marked adopted.
    #[error("adoption {0} is already adopted")]
    AlreadyAdopted(AdoptionId),

    /// Adopted listings no longer accept reports.
    #[error("adoption {0} was adopted and cannot be reported")]
    ReportNotAllowed(AdoptionId),

    /// The listing already collected enough reports and is under review.
    #[error("adoption {0} is already under community review")]
    UnderReview(AdoptionId),
}
