//! Convenience result type alias for JobSite.

use crate::error::AppError;

/// A specialized `Result` type for JobSite operations.
pub type AppResult<T> = Result<T, AppError>;
