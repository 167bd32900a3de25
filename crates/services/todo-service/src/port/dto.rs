//! Commands and DTOs exchanged with transport adapters.
//!
//! Everything here is primitive-typed; value objects are built inside the
//! services. Outbound DTOs never carry passwords.

use std::fmt;

/// Registration request
#[derive(Clone)]
pub struct AddUserCommand {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for AddUserCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddUserCommand")
            .field("user_name", &self.user_name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Credentials presented at login
#[derive(Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCommand")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// New profile data for an existing user
#[derive(Debug, Clone)]
pub struct ChangeUserInfoCommand {
    pub id: String,
    pub user_name: String,
    pub email: String,
}

/// Password change, authorised by the current password
#[derive(Clone)]
pub struct ChangeUserPasswordCommand {
    pub user_id: String,
    pub new_password: String,
    pub old_password: String,
}

impl fmt::Debug for ChangeUserPasswordCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeUserPasswordCommand")
            .field("user_id", &self.user_id)
            .field("new_password", &"[REDACTED]")
            .field("old_password", &"[REDACTED]")
            .finish()
    }
}

/// Public view of a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDto {
    pub id: String,
    pub user_name: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct AddTodoCommand {
    pub user_id: String,
    pub title: String,
    pub description: String,
}

/// Edit of an item's title and description by its owner
#[derive(Debug, Clone)]
pub struct UpdateTodoCommand {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
}

/// Public view of a to-do item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItemDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub is_done: bool,
    pub user_id: String,
}

impl From<&domain::User> for UserDto {
    fn from(user: &domain::User) -> Self {
        Self {
            id: user.id().value().to_string(),
            user_name: user.user_name().value().to_string(),
            email: user.email().value().to_string(),
        }
    }
}

impl From<&domain::TodoItem> for TodoItemDto {
    fn from(item: &domain::TodoItem) -> Self {
        Self {
            id: item.id().value().to_string(),
            title: item.title().value().to_string(),
            description: item.description().value().to_string(),
            is_done: item.is_done(),
            user_id: item.user_id().value().to_string(),
        }
    }
}
