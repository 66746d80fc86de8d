//! Job application handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use revhire_entity::JobApplication;

use crate::dto::request::ApplicationRequest;
use crate::dto::response::ApplicationResponse;
use crate::error::ApiError;
use crate::extractors::{ValidJson, parse_id};
use crate::state::AppState;

/// POST /jobapplication
pub async fn create_jobapplication(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<ApplicationRequest>,
) -> Result<(StatusCode, Json<JobApplication>), ApiError> {
    let application = state.jobapplication_service.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(application)))
}

/// GET /jobapplication/{id}
pub async fn get_jobapplication(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApplicationResponse>, ApiError> {
    let id = parse_id(&id)?;
    let shown = state.jobapplication_service.get(id).await?;
    Ok(Json(shown.into()))
}

/// GET /jobapplications/jobseeker/{jobseeker_id}
pub async fn list_jobseeker_jobapplications(
    State(state): State<AppState>,
    Path(jobseeker_id): Path<String>,
) -> Result<Json<Vec<ApplicationResponse>>, ApiError> {
    let jobseeker_id = parse_id(&jobseeker_id)?;
    let applications = state
        .jobapplication_service
        .list_by_jobseeker(jobseeker_id)
        .await?;
    Ok(Json(
        applications
            .into_iter()
            .map(ApplicationResponse::from)
            .collect(),
    ))
}

/// PUT /jobapplication/{id}
pub async fn update_jobapplication(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(req): ValidJson<ApplicationRequest>,
) -> Result<(StatusCode, Json<u64>), ApiError> {
    let id = parse_id(&id)?;
    let affected = state.jobapplication_service.update(id, req.into()).await?;
    Ok((StatusCode::ACCEPTED, Json(affected)))
}

/// DELETE /jobapplication/{id}
pub async fn delete_jobapplication(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state.jobapplication_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
