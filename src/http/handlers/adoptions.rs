//! Adoption listing endpoints.

use super::edit_token;
use crate::adoption::{
    domain::AdoptionId,
    services::{AdoptionQuery, AdoptionSubmission, PublishAdoptionRequest},
};
use crate::http::{
    error::ApiError,
    extract::{ApiJson, ApiPath, ApiQuery},
    state::AppState,
};
use crate::listing::domain::Page;
use crate::view::{AdoptionCard, AdoptionDetail};
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use serde::Serialize;

/// Response to a successful publication.
#[derive(Debug, Serialize)]
pub struct CreatedAdoption {
    /// The published listing.
    pub adoption: AdoptionDetail,
    /// Token the publisher must keep to mark the animal adopted.
    pub edit_token: String,
}

/// `GET /api/adoptions`
#[tracing::instrument(skip(state))]
pub async fn list_adoptions(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<AdoptionQuery>,
) -> Result<Json<Page<AdoptionCard>>, ApiError> {
    let page = state.adoptions.list(&query).await?;
    let now = state.now();
    Ok(Json(
        page.map(|adoption| AdoptionCard::from_adoption(&adoption, now)),
    ))
}

/// `POST /api/adoptions`
#[tracing::instrument(skip(state, submission), fields(name = %submission.name))]
pub async fn create_adoption(
    State(state): State<AppState>,
    ApiJson(submission): ApiJson<AdoptionSubmission>,
) -> Result<(StatusCode, Json<CreatedAdoption>), ApiError> {
    let published = state
        .adoptions
        .publish(PublishAdoptionRequest::new(submission))
        .await?;
    let adoption = AdoptionDetail::from_adoption(
        &published.adoption,
        state.now(),
        Some(&published.edit_token),
        &state.share_links,
    )?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedAdoption {
            adoption,
            edit_token: published.edit_token.expose().to_owned(),
        }),
    ))
}

/// `GET /api/adoptions/{id}`
#[tracing::instrument(skip(state, headers))]
pub async fn get_adoption(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<AdoptionId>,
    headers: HeaderMap,
) -> Result<Json<AdoptionDetail>, ApiError> {
    let adoption = state
        .adoptions
        .get(id)
        .await?
        .ok_or(ApiError::NotFound("adoption"))?;
    let stored = edit_token(&headers);
    Ok(Json(AdoptionDetail::from_adoption(
        &adoption,
        state.now(),
        stored.as_ref(),
        &state.share_links,
    )?))
}

/// `POST /api/adoptions/{id}/adopt`
#[tracing::instrument(skip(state, headers))]
pub async fn adopt(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<AdoptionId>,
    headers: HeaderMap,
) -> Result<Json<AdoptionDetail>, ApiError> {
    let token = edit_token(&headers).ok_or(ApiError::MissingEditToken)?;
    let adoption = state.adoptions.mark_adopted(id, token.expose()).await?;
    Ok(Json(AdoptionDetail::from_adoption(
        &adoption,
        state.now(),
        Some(&token),
        &state.share_links,
    )?))
}

/// `POST /api/adoptions/{id}/report`
#[tracing::instrument(skip(state, headers))]
pub async fn report(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<AdoptionId>,
    headers: HeaderMap,
) -> Result<Json<AdoptionDetail>, ApiError> {
    let adoption = state.adoptions.report(id).await?;
    let stored = edit_token(&headers);
    Ok(Json(AdoptionDetail::from_adoption(
        &adoption,
        state.now(),
        stored.as_ref(),
        &state.share_links,
    )?))
}
