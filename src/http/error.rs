//! Mapping of service errors onto HTTP responses.

use crate::adoption::{
    domain::AdoptionDomainError, ports::AdoptionRepositoryError, services::AdoptionBoardError,
};
use crate::media::{domain::MediaDomainError, ports::ImageStoreError};
use crate::post::{domain::PostDomainError, ports::PostRepositoryError, services::PostBoardError};
use crate::view::ViewError;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Message shown for failures the visitor cannot fix.
const INTERNAL_MESSAGE: &str = "Ocurrió un error interno. Intentá de nuevo más tarde.";

/// Errors returned by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Lost and found board failure.
    #[error(transparent)]
    Posts(#[from] PostBoardError),
    /// Adoption board failure.
    #[error(transparent)]
    Adoptions(#[from] AdoptionBoardError),
    /// Rejected photo upload.
    #[error(transparent)]
    Media(#[from] MediaDomainError),
    /// Photo storage failure.
    #[error(transparent)]
    Storage(#[from] ImageStoreError),
    /// View rendering failure.
    #[error(transparent)]
    View(#[from] ViewError),
    /// An owner action arrived without the `x-edit-token` header.
    #[error("missing x-edit-token header")]
    MissingEditToken,
    /// The requested resource does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),
    /// The request body or query string could not be read.
    #[error("invalid request: {0}")]
    BadRequest(String),
    /// A path parameter does not name any resource.
    #[error("not found: {0}")]
    UnknownPath(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::UnknownPath(rejection.body_text())
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    /// Returns the HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Posts(err) => post_status(err),
            Self::Adoptions(err) => adoption_status(err),
            Self::Media(err) => media_status(err),
            Self::Storage(_) | Self::View(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::MissingEditToken => StatusCode::FORBIDDEN,
            Self::NotFound(_) | Self::UnknownPath(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

const fn post_status(err: &PostBoardError) -> StatusCode {
    match err {
        PostBoardError::Domain(PostDomainError::AlreadyResolved(_))
        | PostBoardError::Repository(
            PostRepositoryError::DuplicatePost(_) | PostRepositoryError::Rejected(_),
        ) => StatusCode::CONFLICT,
        PostBoardError::Domain(_) => StatusCode::BAD_REQUEST,
        PostBoardError::NotFound(_) | PostBoardError::Repository(PostRepositoryError::NotFound(_)) => {
            StatusCode::NOT_FOUND
        }
        PostBoardError::InvalidEditToken(_) => StatusCode::FORBIDDEN,
        PostBoardError::Repository(PostRepositoryError::Persistence(_))
        | PostBoardError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

const fn adoption_status(err: &AdoptionBoardError) -> StatusCode {
    match err {
        AdoptionBoardError::Domain(AdoptionDomainError::Listing(_)) => StatusCode::BAD_REQUEST,
        AdoptionBoardError::Domain(_)
        | AdoptionBoardError::Repository(
            AdoptionRepositoryError::DuplicateAdoption(_) | AdoptionRepositoryError::Rejected(_),
        ) => StatusCode::CONFLICT,
        AdoptionBoardError::NotFound(_)
        | AdoptionBoardError::Repository(AdoptionRepositoryError::NotFound(_)) => {
            StatusCode::NOT_FOUND
        }
        AdoptionBoardError::InvalidEditToken(_) => StatusCode::FORBIDDEN,
        AdoptionBoardError::Repository(AdoptionRepositoryError::Persistence(_))
        | AdoptionBoardError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

const fn media_status(err: &MediaDomainError) -> StatusCode {
    match err {
        MediaDomainError::UnsupportedContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        MediaDomainError::EmptyUpload => StatusCode::BAD_REQUEST,
        MediaDomainError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        MediaDomainError::InvalidKey(_) => StatusCode::NOT_FOUND,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            error!(error = %self, "request failed");
            INTERNAL_MESSAGE.to_owned()
        } else {
            self.to_string()
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
