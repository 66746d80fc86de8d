//! Responses for unmatched paths and methods.

use axum::Json;
use axum::http::StatusCode;

use revhire_core::error::AppError;

use crate::error::{ApiError, ErrorBody};

/// Any path without a route.
pub async fn not_found() -> ApiError {
    ApiError(AppError::not_found("Not Found"))
}

/// A known path requested with an unsupported method.
pub async fn method_not_allowed() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorBody {
            detail: "Method Not Allowed".to_string(),
        }),
    )
}
