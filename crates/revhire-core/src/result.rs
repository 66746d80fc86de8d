//! Convenience result type alias for RevHire.

use crate::error::AppError;

/// A specialized `Result` type for RevHire operations.
pub type AppResult<T> = Result<T, AppError>;
