//! Domain-level errors.
//!
//! Two recoverable kinds live here:
//! - [`InvalidInputError`] is raised when a value object rejects raw input.
//! - [`ValidationError`] is raised by use cases when a business rule fails.
//!
//! Both are independent of infrastructure concerns (HTTP, database).

use thiserror::Error;

/// Raw input failed a value object's format or non-empty rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct InvalidInputError {
    field: &'static str,
    message: String,
}

impl InvalidInputError {
    /// Create an error for the given field
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// Shorthand for the "blank after trimming" case
    pub fn empty(field: &'static str) -> Self {
        Self::new(field, format!("{} cannot be empty", field.replace('_', " ")))
    }

    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Human-readable reason
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Business rule violations raised by application services.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("email already exists")]
    EmailAlreadyExists,

    #[error("user not found")]
    UserNotFound,

    /// Caller does not own the resource it tried to touch
    #[error("invalid user")]
    InvalidUser,

    #[error("todo not found")]
    TodoNotFound,

    #[error("invalid password")]
    InvalidPassword,
}

impl ValidationError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            ValidationError::UserNotFound => "USER_NOT_FOUND",
            ValidationError::InvalidUser => "INVALID_USER",
            ValidationError::TodoNotFound => "TODO_NOT_FOUND",
            ValidationError::InvalidPassword => "INVALID_PASSWORD",
        }
    }
}

/// Result type alias for value object construction
pub type InputResult<T> = Result<T, InvalidInputError>;
