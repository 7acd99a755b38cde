//! Route handlers.

pub mod adoptions;
pub mod media;
pub mod posts;

use crate::listing::domain::EditToken;
use axum::http::HeaderMap;

/// Header carrying the publisher's edit token.
pub const EDIT_TOKEN_HEADER: &str = "x-edit-token";

/// Returns the edit token sent by the client, if any.
pub(crate) fn edit_token(headers: &HeaderMap) -> Option<EditToken> {
    headers
        .get(EDIT_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| EditToken::parse(value).ok())
}

/// Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}
