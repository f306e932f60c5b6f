//! Convenience result type alias for Dynasty.

use crate::error::AppError;

/// A specialized `Result` type for Dynasty operations.
pub type AppResult<T> = Result<T, AppError>;
