//! Lost and found report endpoints.

use super::edit_token;
use crate::http::{
    error::ApiError,
    extract::{ApiJson, ApiPath, ApiQuery},
    state::AppState,
};
use crate::listing::domain::Page;
use crate::post::{
    domain::PostId,
    services::{PostQuery, PostSubmission, PublishPostRequest},
};
use crate::view::{PostCard, PostDetail};
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use serde::Serialize;

/// Response to a successful publication.
#[derive(Debug, Serialize)]
pub struct CreatedPost {
    /// The published report.
    pub post: PostDetail,
    /// Token the publisher must keep to resolve the report.
    pub edit_token: String,
}

/// `GET /api/posts`
#[tracing::instrument(skip(state))]
pub async fn list_posts(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<PostQuery>,
) -> Result<Json<Page<PostCard>>, ApiError> {
    let page = state.posts.list(&query).await?;
    let now = state.now();
    Ok(Json(page.map(|post| PostCard::from_post(&post, now))))
}

/// `POST /api/posts`
#[tracing::instrument(skip(state, submission), fields(title = %submission.title))]
pub async fn create_post(
    State(state): State<AppState>,
    ApiJson(submission): ApiJson<PostSubmission>,
) -> Result<(StatusCode, Json<CreatedPost>), ApiError> {
    let published = state
        .posts
        .publish(PublishPostRequest::new(submission))
        .await?;
    let post = PostDetail::from_post(
        &published.post,
        state.now(),
        Some(&published.edit_token),
        &state.share_links,
    )?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedPost {
            post,
            edit_token: published.edit_token.expose().to_owned(),
        }),
    ))
}

/// `GET /api/posts/{id}`
#[tracing::instrument(skip(state, headers))]
pub async fn get_post(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<PostId>,
    headers: HeaderMap,
) -> Result<Json<PostDetail>, ApiError> {
    let post = state
        .posts
        .get(id)
        .await?
        .ok_or(ApiError::NotFound("post"))?;
    let stored = edit_token(&headers);
    Ok(Json(PostDetail::from_post(
        &post,
        state.now(),
        stored.as_ref(),
        &state.share_links,
    )?))
}

/// `POST /api/posts/{id}/resolve`
#[tracing::instrument(skip(state, headers))]
pub async fn resolve_post(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<PostId>,
    headers: HeaderMap,
) -> Result<Json<PostDetail>, ApiError> {
    let token = edit_token(&headers).ok_or(ApiError::MissingEditToken)?;
    let post = state.posts.resolve(id, token.expose()).await?;
    Ok(Json(PostDetail::from_post(
        &post,
        state.now(),
        Some(&token),
        &state.share_links,
    )?))
}
