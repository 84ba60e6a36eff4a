use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::store::StoreError;

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Generic message for failures nobody anticipated
pub const UNEXPECTED_ERROR_MESSAGE: &str = "Something went wrong!";

/// Custom error type for API endpoints
///
/// Maps each failure kind to a status code and a client-safe message.
/// Storage causes are logged here and never sent to the client.
#[derive(Debug)]
pub enum ApiError {
    /// Required creation fields missing or falsy
    Validation(&'static str),
    /// Request body was not a JSON object of the expected shape
    InvalidBody(String),
    /// No item with the requested id
    ItemNotFound,
    /// Backing document could not be read or written
    Storage {
        message: &'static str,
        source: StoreError,
    },
    /// No route matches the method and path
    RouteNotFound,
    /// Anything else
    Internal(anyhow::Error),
}

impl ApiError {
    pub fn storage(message: &'static str) -> impl FnOnce(StoreError) -> ApiError {
        move |source| ApiError::Storage { message, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.to_string()),
            ApiError::InvalidBody(detail) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid request body: {}", detail),
            ),
            ApiError::ItemNotFound => (StatusCode::NOT_FOUND, "Item not found".to_string()),
            ApiError::Storage { message, source } => {
                tracing::error!("{}: {}", message, source);
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
            ApiError::RouteNotFound => {
                (StatusCode::NOT_FOUND, "Endpoint not found".to_string())
            }
            ApiError::Internal(err) => {
                tracing::error!("Unhandled error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    UNEXPECTED_ERROR_MESSAGE.to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<axum::extract::rejection::JsonRejection> for ApiError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}
