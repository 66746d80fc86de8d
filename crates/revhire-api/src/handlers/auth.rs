//! Authentication handlers.

use axum::Json;
use axum::extract::State;

use revhire_auth::token::AccessToken;

use crate::dto::request::LoginRequest;
use crate::error::ApiError;
use crate::extractors::ValidForm;
use crate::state::AppState;

/// POST /jobseeker_login
///
/// Takes a form-encoded `username` (the job seeker email) and `password`.
pub async fn login(
    State(state): State<AppState>,
    ValidForm(req): ValidForm<LoginRequest>,
) -> Result<Json<AccessToken>, ApiError> {
    let token = state
        .login_service
        .login(&req.username, &req.password)
        .await?;
    Ok(Json(token))
}
