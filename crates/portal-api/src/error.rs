use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use portal_core::error::DomainError;

use crate::response::ApiResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Body that could not be read as the expected JSON
    #[error("Invalid request body: {1}")]
    InvalidBody(StatusCode, String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("LLM error: {0}")]
    LlmError(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::UnknownRole(_) | DomainError::UnknownNavItem(_) => {
                ApiError::NotFound(err.to_string())
            }
            DomainError::InvalidFlowInput(_) | DomainError::NotASection(_) => {
                ApiError::BadRequest(err.to_string())
            }
            DomainError::FlowFailed(_) => ApiError::LlmError(err.to_string()),
            _ => ApiError::InternalError(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, "NOT_FOUND", msg)
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg)
            }
            ApiError::InvalidBody(status, msg) => {
                tracing::warn!("Invalid request body: {}", msg);
                (status, "INVALID_BODY", msg)
            }
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg)
            }
            ApiError::LlmError(msg) => {
                tracing::error!("LLM error: {}", msg);
                (StatusCode::SERVICE_UNAVAILABLE, "LLM_ERROR", msg)
            }
        };

        (status, Json(ApiResponse::failure(code, message))).into_response()
    }
}
