use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::menu::FieldViolation;

pub const NOT_FOUND_MESSAGE: &str = "Menu item not found";
pub const VALIDATION_FAILED_MESSAGE: &str = "Validation failed";

#[derive(Debug, Error, PartialEq)]
pub enum AppError {
    #[error("validation failed with {} violation(s)", .errors.len())]
    ValidationFailed { errors: Vec<FieldViolation> },
    #[error("menu item not found")]
    NotFound { id: Option<u64> },
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldViolation>>,
}

impl AppError {
    pub fn not_found(id: u64) -> Self {
        Self::NotFound { id: Some(id) }
    }

    /// Not found for a path segment that is not a valid id.
    pub fn unknown_id() -> Self {
        Self::NotFound { id: None }
    }

    pub fn validation_failed(errors: Vec<FieldViolation>) -> Self {
        Self::ValidationFailed { errors }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::ValidationFailed { errors } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    message: VALIDATION_FAILED_MESSAGE,
                    errors: Some(errors),
                },
            ),
            Self::NotFound { .. } => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    message: NOT_FOUND_MESSAGE,
                    errors: None,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}
