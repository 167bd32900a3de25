//! Unified error handling.
//!
//! One tagged error covers the whole taxonomy:
//! - [`AppError::InvalidInput`]: raw input rejected by a value object
//! - [`AppError::Validation`]: a business rule failed inside a use case
//! - everything else: infrastructure failures, opaque to clients
//!
//! Transport adapters branch on the variant (or [`AppError::is_client_error`])
//! instead of inspecting error types at runtime.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::{InvalidInputError, ValidationError};
use thiserror::Error;

use crate::payload::Payload;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Caller errors
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    // Authentication & Authorization
    #[error("Authentication required")]
    Unauthorized,

    #[error("Access denied")]
    Forbidden,

    // External service errors
    #[cfg(feature = "database")]
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[cfg(feature = "jwt")]
    #[error("Authentication error")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Business rule kind, if this is one
    pub fn business_error(&self) -> Option<ValidationError> {
        match self {
            AppError::Validation(kind) => Some(*kind),
            _ => None,
        }
    }

    /// Whether the caller can fix this by changing the request
    pub fn is_client_error(&self) -> bool {
        self.status().is_client_error()
    }

    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::Validation(kind) => kind.code(),
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Unauthorized => "UNAUTHORIZED",
            AppError::Forbidden => "FORBIDDEN",
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
            #[cfg(feature = "jwt")]
            AppError::Jwt(_) => "AUTH_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Validation(kind) => match kind {
                ValidationError::EmailAlreadyExists => StatusCode::CONFLICT,
                ValidationError::UserNotFound | ValidationError::TodoNotFound => {
                    StatusCode::NOT_FOUND
                }
                ValidationError::InvalidUser => StatusCode::FORBIDDEN,
                ValidationError::InvalidPassword => StatusCode::UNAUTHORIZED,
            },
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            #[cfg(feature = "jwt")]
            AppError::Jwt(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidInput(e) => e.message().to_string(),
            AppError::BadRequest(msg) => msg.clone(),

            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            #[cfg(feature = "jwt")]
            AppError::Jwt(e) => {
                tracing::debug!("JWT error: {:?}", e);
                "Invalid or expired token".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            _ => self.to_string(),
        }
    }

    /// Key under which the envelope reports this error
    fn error_key(&self) -> &'static str {
        match self {
            AppError::InvalidInput(e) => e.field(),
            _ => "cause",
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.user_message();
        let body = Payload::<()>::fail()
            .with_message(message.clone())
            .with_error(self.error_key(), message)
            .with_error("code", self.code());

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> business not-found conversion
pub trait OptionExt<T> {
    fn ok_or_validation(self, kind: ValidationError) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_validation(self, kind: ValidationError) -> AppResult<T> {
        self.ok_or(AppError::Validation(kind))
    }
}

/// Convenience constructors
impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
