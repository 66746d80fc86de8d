//! Employer handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use revhire_entity::Employer;

use crate::dto::request::AccountRequest;
use crate::dto::response::AccountResponse;
use crate::error::ApiError;
use crate::extractors::{ValidJson, parse_id};
use crate::state::AppState;

/// POST /employer
pub async fn create_employer(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<AccountRequest>,
) -> Result<(StatusCode, Json<Employer>), ApiError> {
    let employer = state.employer_service.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(employer)))
}

/// GET /employers
///
/// Returns only the first registered employer.
pub async fn first_employer(
    State(state): State<AppState>,
) -> Result<Json<AccountResponse>, ApiError> {
    let employer = state.employer_service.first().await?;
    Ok(Json(employer.into()))
}

/// GET /employer/{id}
pub async fn get_employer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AccountResponse>, ApiError> {
    let id = parse_id(&id)?;
    let employer = state.employer_service.get(id).await?;
    Ok(Json(employer.into()))
}

/// PUT /employer/{id}
pub async fn update_employer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(req): ValidJson<AccountRequest>,
) -> Result<(StatusCode, Json<u64>), ApiError> {
    let id = parse_id(&id)?;
    let affected = state.employer_service.update(id, req.into()).await?;
    Ok((StatusCode::ACCEPTED, Json(affected)))
}

/// DELETE /employer/{id}
pub async fn delete_employer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state.employer_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
