//! API error types with HTTP response mapping.

use application::UseCaseError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::OrderError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found.
    NotFound(String),
    /// Bad request from the client.
    BadRequest(String),
    /// Use-case failure.
    UseCase(UseCaseError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::UseCase(err) => use_case_error_to_response(err),
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

fn use_case_error_to_response(err: UseCaseError) -> (StatusCode, String) {
    match &err {
        UseCaseError::InvalidCommand { .. } | UseCaseError::InvalidStatus { .. } => {
            (StatusCode::BAD_REQUEST, err.to_string())
        }
        UseCaseError::Order(order_err) => match order_err {
            OrderError::InvalidTransition { .. } => (StatusCode::CONFLICT, err.to_string()),
            OrderError::InvalidQuantity { .. } | OrderError::NegativePrice { .. } => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
        },
        UseCaseError::NotFound { .. } => (StatusCode::NOT_FOUND, err.to_string()),
        UseCaseError::Storage(_) => {
            tracing::error!(error = %err, "storage failure");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
        UseCaseError::Notification(_) => {
            tracing::error!(error = %err, "notification failure");
            (StatusCode::BAD_GATEWAY, err.to_string())
        }
    }
}

impl From<UseCaseError> for ApiError {
    fn from(err: UseCaseError) -> Self {
        ApiError::UseCase(err)
    }
}
