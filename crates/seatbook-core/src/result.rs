//! Convenience result type alias for seat booking.

use crate::error::AppError;

/// A specialized `Result` type for seat booking operations.
pub type AppResult<T> = Result<T, AppError>;
