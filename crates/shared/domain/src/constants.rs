//! Domain-level constants.
//!
//! Field names reported by [`InvalidInputError`](crate::InvalidInputError) and
//! the shape rules value objects enforce.

// =============================================================================
// Field names
// =============================================================================

pub const FIELD_USER_ID: &str = "user_id";
pub const FIELD_USER_NAME: &str = "user_name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PASSWORD: &str = "password";
pub const FIELD_TODO_ITEM_ID: &str = "todo_item_id";
pub const FIELD_TODO_ITEM_TITLE: &str = "title";
pub const FIELD_TODO_ITEM_DESCRIPTION: &str = "description";

// =============================================================================
// Validation
// =============================================================================

/// Email shape: `local@domain.tld`, no whitespace, exactly one `@`.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
