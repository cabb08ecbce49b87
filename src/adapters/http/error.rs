//! Error responses shared by every HTTP area.

use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

/// Error body returned by all endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// API error carrying the status and body to send.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    /// 400 with `VALIDATION_FAILED`.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorResponse::new("VALIDATION_FAILED", message),
        }
    }

    /// 500 with `CONFIGURATION_ERROR`.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: ErrorResponse::new("CONFIGURATION_ERROR", message),
        }
    }

    /// 500 with `INTERNAL_ERROR`.
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: ErrorResponse::new("INTERNAL_ERROR", message),
        }
    }

    /// Maps a domain error to a response.
    ///
    /// Validation and not-found errors keep their message. Anything else is
    /// logged and replaced by `failure_message`.
    pub fn from_domain(err: DomainError, failure_message: &str) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => Self::bad_request(err.message),
            ErrorCode::ShipmentNotFound | ErrorCode::DocumentNotFound => Self {
                status: StatusCode::NOT_FOUND,
                body: ErrorResponse::new(err.code.to_string(), err.message),
            },
            ErrorCode::DatabaseError | ErrorCode::InternalError => {
                tracing::error!(error = %err, "{}", failure_message);
                Self::internal(failure_message)
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &ErrorResponse {
        &self.body
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Unwraps a JSON body, answering a malformed one with 400 and `message`.
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>, message: &str) -> Result<T, ApiError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            tracing::debug!(rejection = %rejection.body_text(), "Rejected request body");
            Err(ApiError::bad_request(message))
        }
    }
}
