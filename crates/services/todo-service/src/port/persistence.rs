//! Persistence ports.
//!
//! Lookups that legitimately find nothing return `Ok(None)`; `Err` is kept
//! for storage failures.

use async_trait::async_trait;

use common::AppResult;
use domain::{
    Email, Password, TodoItem, TodoItemDescription, TodoItemId, TodoItemTitle, User, UserId,
    UserName,
};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Data needed to store a new to-do item. The store assigns the id.
#[derive(Debug, Clone)]
pub struct CreateTodoCommand {
    pub user_id: UserId,
    pub title: TodoItemTitle,
    pub description: TodoItemDescription,
}

/// Data needed to store a new user. `password` is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserCommand {
    pub user_name: UserName,
    pub email: Email,
    pub password: Password,
}

/// Storage for to-do items.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TodoItemPersistence: Send + Sync {
    /// Store a new item, not done, and return it with its generated id
    async fn create(&self, command: CreateTodoCommand) -> AppResult<TodoItem>;

    /// Find an item by id
    async fn get(&self, id: &TodoItemId) -> AppResult<Option<TodoItem>>;

    /// List all items owned by a user
    async fn list(&self, user_id: &UserId) -> AppResult<Vec<TodoItem>>;

    /// Overwrite a stored item
    async fn update(&self, item: &TodoItem) -> AppResult<()>;

    /// Remove an item
    async fn delete(&self, id: &TodoItemId) -> AppResult<()>;
}

/// Storage for users.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserPersistence: Send + Sync {
    /// Store a new user and return it with its generated id
    async fn create(&self, command: CreateUserCommand) -> AppResult<User>;

    /// Find a user by id
    async fn get_by_id(&self, id: &UserId) -> AppResult<Option<User>>;

    /// Find a user by email address
    async fn get_by_email(&self, email: &Email) -> AppResult<Option<User>>;

    /// Overwrite a stored user
    async fn update(&self, user: &User) -> AppResult<()>;
}
