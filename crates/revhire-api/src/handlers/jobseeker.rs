//! Job seeker handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use revhire_entity::JobSeeker;

use crate::dto::request::AccountRequest;
use crate::dto::response::{AccountResponse, JobSeekerListItem};
use crate::error::ApiError;
use crate::extractors::{ValidJson, parse_id};
use crate::state::AppState;

/// POST /jobseeker
pub async fn create_jobseeker(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<AccountRequest>,
) -> Result<(StatusCode, Json<JobSeeker>), ApiError> {
    let seeker = state.jobseeker_service.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(seeker)))
}

/// GET /jobseekers
pub async fn list_jobseekers(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobSeekerListItem>>, ApiError> {
    let seekers = state.jobseeker_service.list().await?;
    Ok(Json(seekers.into_iter().map(JobSeekerListItem::from).collect()))
}

/// GET /jobseeker/{id}
pub async fn get_jobseeker(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AccountResponse>, ApiError> {
    let id = parse_id(&id)?;
    let seeker = state.jobseeker_service.get(id).await?;
    Ok(Json(seeker.into()))
}

/// PUT /jobseeker/{id}
pub async fn update_jobseeker(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(req): ValidJson<AccountRequest>,
) -> Result<(StatusCode, Json<u64>), ApiError> {
    let id = parse_id(&id)?;
    let affected = state.jobseeker_service.update(id, req.into()).await?;
    Ok((StatusCode::ACCEPTED, Json(affected)))
}

/// DELETE /jobseeker/{id}
pub async fn delete_jobseeker(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state.jobseeker_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
