//! Request handlers, one module per resource.

pub mod product;

use crate::error::AppError;

/// Fallback for requests that match a route path but not its method set.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
