//! Observable query status.

use charcat_core::error::AppError;

/// Lifecycle of one query key.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    /// Never requested, or disabled.
    Idle,
    /// A fetch is in flight.
    Pending,
    /// The latest fetch succeeded.
    Success(T),
    /// The latest fetch failed.
    Error(AppError),
}

impl<T> QueryState<T> {
    /// Whether a fetch is in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Whether the latest fetch failed.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// The fetched data, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    /// The failure, if any.
    pub fn error(&self) -> Option<&AppError> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> From<Result<T, AppError>> for QueryState<T> {
    fn from(result: Result<T, AppError>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(err) => Self::Error(err),
        }
    }
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self::Idle
    }
}
