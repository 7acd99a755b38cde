//! Request extractors whose rejections render as [`ApiError`] JSON bodies.

use crate::http::error::ApiError;
use axum::extract::{FromRequest, FromRequestParts};

/// JSON request body; malformed or incomplete bodies are 400s.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(
    /// Deserialized body.
    pub T,
);

/// Path parameters; values that do not parse mean the resource is unknown.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(
    /// Deserialized parameters.
    pub T,
);

/// Query string; unparseable parameters are 400s.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(
    /// Deserialized query.
    pub T,
);
