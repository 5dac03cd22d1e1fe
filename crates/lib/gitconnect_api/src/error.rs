//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal server error")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match &self {
            AppError::Validation(m) => (StatusCode::BAD_REQUEST, "validation_error", m.as_str()),
            AppError::NotFound(m) => (StatusCode::NOT_FOUND, "not_found", m.as_str()),
            AppError::Unauthorized(m) => (StatusCode::UNAUTHORIZED, "unauthorized", m.as_str()),
            AppError::Forbidden(m) => (StatusCode::FORBIDDEN, "forbidden", m.as_str()),
            // Internal details stay in the logs, never in the response body.
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "Internal server error",
            ),
        };
        let body = Json(ErrorResponse {
            error: error.to_string(),
            message: message.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => AppError::NotFound("row not found".into()),
            _ => AppError::Internal(e.to_string()),
        }
    }
}

impl From<gitconnect_core::auth::AuthError> for AppError {
    fn from(e: gitconnect_core::auth::AuthError) -> Self {
        use gitconnect_core::auth::AuthError;
        match e {
            AuthError::TokenError(msg) => AppError::Internal(msg),
            AuthError::ValidationError(msg) => AppError::Validation(msg),
            AuthError::DbError(e) => AppError::from(e),
            AuthError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<gitconnect_core::posts::PostError> for AppError {
    fn from(e: gitconnect_core::posts::PostError) -> Self {
        use gitconnect_core::posts::PostError;
        match e {
            PostError::NotFound => AppError::NotFound("Post not found".into()),
            PostError::Forbidden => {
                AppError::Forbidden("You can only modify your own posts".into())
            }
            PostError::Validation(msg) => AppError::Validation(msg),
            PostError::Db(e) => AppError::from(e),
        }
    }
}

impl From<gitconnect_core::profiles::ProfileError> for AppError {
    fn from(e: gitconnect_core::profiles::ProfileError) -> Self {
        use gitconnect_core::profiles::ProfileError;
        match e {
            ProfileError::NotFound => AppError::NotFound("Profile not found".into()),
            ProfileError::Forbidden => {
                AppError::Forbidden("You can only modify your own profile".into())
            }
            ProfileError::Validation(msg) => AppError::Validation(msg),
            ProfileError::Db(e) => AppError::from(e),
        }
    }
}
