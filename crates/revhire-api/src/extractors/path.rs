//! Typed path parameter helpers.

use revhire_core::error::AppError;

/// Parses an integer entity id from a path segment.
pub fn parse_id(s: &str) -> Result<i64, AppError> {
    s.parse::<i64>()
        .map_err(|_| AppError::validation(format!("Invalid id: {s}")))
}
