//! Photo upload and download endpoints.

use crate::http::{error::ApiError, extract::ApiPath, state::AppState};
use crate::media::domain::{ImageKey, ImageUpload, StoredImage};
use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::info;

/// `POST /api/images`
///
/// The body is the raw image; its format comes from `Content-Type`.
#[tracing::instrument(skip(state, headers, body), fields(bytes = body.len()))]
pub async fn upload_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<StoredImage>), ApiError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    let upload = ImageUpload::new(content_type, body.to_vec(), state.max_image_bytes)?;
    let stored = state.images.put(&upload).await?;
    info!(key = %stored.key, "photo stored");
    Ok((StatusCode::CREATED, Json(stored)))
}

/// `GET /media/{key}`
#[tracing::instrument(skip(state))]
pub async fn get_media(
    State(state): State<AppState>,
    ApiPath(key): ApiPath<String>,
) -> Result<Response, ApiError> {
    let image_key = ImageKey::parse(&key).map_err(|_| ApiError::NotFound("image"))?;
    let object = state
        .images
        .get(&image_key)
        .await?
        .ok_or(ApiError::NotFound("image"))?;
    Ok((
        [
            (header::CONTENT_TYPE, object.content_type),
            (header::CACHE_CONTROL, "public, max-age=31536000, immutable"),
        ],
        object.bytes,
    )
        .into_response())
}
