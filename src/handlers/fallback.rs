use crate::error::ApiError;

/// Fallback for any unmatched route or method
pub async fn not_found_handler() -> ApiError {
    ApiError::RouteNotFound
}
