//! API error handling for the anonboard web layer.
//!
//! Logical outcomes such as "incorrect password" are plain-text `200`
//! responses produced by the handlers. `ApiError` only covers bodies that
//! cannot be decoded, missing required fields, and internal failures.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::BoardError;

/// Per-field validation messages, keyed by field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Machine-readable error code sent in the `error.code` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The body could not be decoded.
    BadRequest,
    /// A required field is missing or empty.
    ValidationError,
    /// No such route or resource.
    NotFound,
    /// The server failed; details are only logged.
    InternalError,
}

/// Errors returned by the board API as JSON bodies.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The body could not be decoded.
    #[error("{0}")]
    BadRequest(String),

    /// Required fields are missing or empty.
    #[error("Validation failed")]
    Validation(FieldErrors),

    /// Named route or resource does not exist.
    #[error("{0} not found")]
    NotFound(String),

    /// Anything else. The cause is logged, never sent.
    #[error("An internal error occurred")]
    Internal,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: ErrorDetail<'a>,
}

#[derive(Serialize)]
struct ErrorDetail<'a> {
    code: ErrorCode,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a FieldErrors>,
}

impl ApiError {
    /// Create a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    /// Collect the messages of a failed `validate()` call.
    pub fn from_validation_errors(errors: ValidationErrors) -> Self {
        let details = errors
            .field_errors()
            .into_iter()
            .map(|(field, field_errors)| {
                let messages = field_errors
                    .iter()
                    .map(|e| match &e.message {
                        Some(message) => message.to_string(),
                        None => format!("{} is invalid", field),
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();

        ApiError::Validation(details)
    }

    /// The code sent in `error.code`.
    pub fn code(&self) -> ErrorCode {
        match self {
            ApiError::BadRequest(_) => ErrorCode::BadRequest,
            ApiError::Validation(_) => ErrorCode::ValidationError,
            ApiError::NotFound(_) => ErrorCode::NotFound,
            ApiError::Internal => ErrorCode::InternalError,
        }
    }

    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self.code() {
            ErrorCode::BadRequest | ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let details = match &self {
            ApiError::Validation(fields) => Some(fields),
            _ => None,
        };
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code(),
                message: self.to_string(),
                details,
            },
        };
        (self.status_code(), Json(body)).into_response()
    }
}

impl From<BoardError> for ApiError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::NotFound(what) => ApiError::NotFound(what),
            BoardError::Validation(msg) => ApiError::BadRequest(msg),
            other => {
                tracing::error!(error = %other, "Board operation failed");
                ApiError::Internal
            }
        }
    }
}
