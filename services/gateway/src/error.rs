use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use matching_engine::EngineError;
use serde_json::json;
use thiserror::Error;
use types::errors::CriteriaError;

/// Central error type for the gateway
///
/// Every variant maps to a distinct, stable (status, code) pair so API
/// consumers can branch on error kind rather than message text.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("No loads found: {0}")]
    NoMatch(String),

    #[error("Load not found: {0}")]
    LoadNotFound(String),

    #[error("Load already booked: {0}")]
    AlreadyBooked(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<CriteriaError> for AppError {
    fn from(err: CriteriaError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Criteria(e) => AppError::Validation(e.to_string()),
            EngineError::NoMatch => {
                AppError::NoMatch("No available loads match the specified criteria".to_string())
            }
            EngineError::LoadNotFound { load_id } => {
                AppError::LoadNotFound(format!("No load found with ID: {load_id}"))
            }
            EngineError::AlreadyBooked { load_id } => {
                AppError::AlreadyBooked(format!("Load {load_id} has already been booked"))
            }
            EngineError::Store(e) => AppError::Internal(anyhow::Error::new(e)),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, code) = match self {
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, "UNAUTHORIZED"),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg, "VALIDATION_ERROR"),
            AppError::NoMatch(msg) => (StatusCode::NOT_FOUND, msg, "NO_MATCHING_LOADS"),
            AppError::LoadNotFound(msg) => (StatusCode::NOT_FOUND, msg, "LOAD_NOT_FOUND"),
            AppError::AlreadyBooked(msg) => (StatusCode::CONFLICT, msg, "ALREADY_BOOKED"),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error occurred".to_string(),
                "INTERNAL_ERROR",
            ),
        };

        let body = Json(json!({
            "error": code,
            "message": error_message
        }));

        (status, body).into_response()
    }
}
