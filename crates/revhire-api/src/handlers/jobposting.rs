//! Job posting handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use revhire_entity::JobPosting;

use crate::dto::request::PostingRequest;
use crate::dto::response::PostingResponse;
use crate::error::ApiError;
use crate::extractors::{ValidJson, parse_id};
use crate::state::AppState;

/// POST /jobposting
pub async fn create_jobposting(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<PostingRequest>,
) -> Result<(StatusCode, Json<JobPosting>), ApiError> {
    let posting = state.jobposting_service.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(posting)))
}

/// GET /jobposting/{id}
pub async fn get_jobposting(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PostingResponse>, ApiError> {
    let id = parse_id(&id)?;
    let shown = state.jobposting_service.get(id).await?;
    Ok(Json(shown.into()))
}

/// GET /jobpostings/employer/{employer_id}
pub async fn list_employer_jobpostings(
    State(state): State<AppState>,
    Path(employer_id): Path<String>,
) -> Result<Json<Vec<PostingResponse>>, ApiError> {
    let employer_id = parse_id(&employer_id)?;
    let postings = state
        .jobposting_service
        .list_by_employer(employer_id)
        .await?;
    Ok(Json(postings.into_iter().map(PostingResponse::from).collect()))
}

/// PUT /jobposting/{id}
pub async fn update_jobposting(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(req): ValidJson<PostingRequest>,
) -> Result<(StatusCode, Json<u64>), ApiError> {
    let id = parse_id(&id)?;
    let affected = state.jobposting_service.update(id, req.into()).await?;
    Ok((StatusCode::ACCEPTED, Json(affected)))
}

/// DELETE /jobposting/{id}
pub async fn delete_jobposting(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state.jobposting_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
