//! Value objects - immutable, self-validating wrappers around strings.
//!
//! Every constructor trims its input and rejects what is left when it breaks
//! the type's rule. Two values of one type are equal iff their canonical
//! strings are equal.

mod email;
mod password;
mod todo_item_description;
mod todo_item_id;
mod todo_item_title;
mod user_id;
mod user_name;

pub use email::Email;
pub use password::Password;
pub use todo_item_description::TodoItemDescription;
pub use todo_item_id::TodoItemId;
pub use todo_item_title::TodoItemTitle;
pub use user_id::UserId;
pub use user_name::UserName;

use crate::error::{InputResult, InvalidInputError};

/// Trim `raw` and fail with an empty-field error when nothing remains.
pub(crate) fn non_empty(field: &'static str, raw: &str) -> InputResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InvalidInputError::empty(field));
    }
    Ok(trimmed.to_string())
}
