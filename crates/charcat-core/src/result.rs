//! Convenience result type alias for Charcat.

use crate::error::AppError;

/// A specialized `Result` type for Charcat operations.
pub type AppResult<T> = Result<T, AppError>;
