//! API error types and conversions from service errors.
//!
//! Maps the service-layer taxonomy onto HTTP: validation failures become
//! 400s, missing or cross-owner records become indistinguishable 404s,
//! provider rate limiting surfaces as 429, and everything else collapses to
//! a generic 500 with details kept server-side in the logs.

use crate::auth::services::AuthError;
use crate::task::{
    domain::TaskDomainError,
    ports::SuggestionError,
    services::TaskLifecycleError,
};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// API error body serialised to JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiError {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ApiError {
    /// Creates a new error body.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Creates a bad request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    /// Creates a not found error.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", message)
    }

    /// Creates an unauthorized error.
    #[must_use]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new("UNAUTHORIZED", message)
    }

    /// Creates an internal server error.
    #[must_use]
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }
}

/// Response wrapper pairing an HTTP status with an [`ApiError`] body.
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a new error response.
    #[must_use]
    pub const fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }

    /// Convenience constructor for 400 responses.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ApiError::bad_request(message))
    }

    /// Convenience constructor for 401 responses.
    #[must_use]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, ApiError::unauthorized(message))
    }

    /// Convenience constructor for 404 responses.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, ApiError::not_found(message))
    }

    /// Convenience constructor for generic 500 responses.
    #[must_use]
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::internal_error(message),
        )
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<TaskLifecycleError> for ApiErrorResponse {
    fn from(err: TaskLifecycleError) -> Self {
        match err {
            TaskLifecycleError::NotFound => Self::not_found("task not found"),
            TaskLifecycleError::Domain(TaskDomainError::EmptyTitle) => {
                Self::bad_request("title is required")
            }
            TaskLifecycleError::Domain(TaskDomainError::NoPendingSuggestion(_)) => {
                Self::not_found("no pending suggestion")
            }
            TaskLifecycleError::Suggestion(SuggestionError::RateLimited) => Self::new(
                StatusCode::TOO_MANY_REQUESTS,
                ApiError::new("RATE_LIMITED", "AI quota exceeded, try again later"),
            ),
            TaskLifecycleError::Suggestion(SuggestionError::Provider(detail)) => {
                tracing::error!("suggestion request failed: {detail}");
                Self::internal_error("AI improvement failed")
            }
            TaskLifecycleError::Repository(err) => {
                tracing::error!("task repository failure: {err}");
                Self::internal_error("internal server error")
            }
        }
    }
}

impl From<AuthError> for ApiErrorResponse {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Domain(_) => Self::bad_request("invalid email address"),
            AuthError::EmptyPassword => Self::bad_request("email and password are required"),
            AuthError::EmailTaken => Self::bad_request("user already exists"),
            AuthError::InvalidCredentials => Self::bad_request("invalid credentials"),
            AuthError::InvalidToken => Self::unauthorized("invalid or expired token"),
            AuthError::Hashing(detail) | AuthError::TokenEncoding(detail) => {
                tracing::error!("auth infrastructure failure: {detail}");
                Self::internal_error("internal server error")
            }
            AuthError::Repository(err) => {
                tracing::error!("user repository failure: {err}");
                Self::internal_error("internal server error")
            }
        }
    }
}
