//! Use-case contracts. Each application service implements exactly one.

use async_trait::async_trait;

use common::AppResult;

use super::dto::{
    AddTodoCommand, AddUserCommand, ChangeUserInfoCommand, ChangeUserPasswordCommand,
    LoginCommand, TodoItemDto, UpdateTodoCommand, UserDto,
};

// =============================================================================
// Users
// =============================================================================

#[async_trait]
pub trait AddUserUseCase: Send + Sync {
    /// Register a new user
    async fn add(&self, command: AddUserCommand) -> AppResult<UserDto>;
}

#[async_trait]
pub trait GetUserUseCase: Send + Sync {
    /// Get a user by id; `None` when no such user exists
    async fn get(&self, user_id: &str) -> AppResult<Option<UserDto>>;
}

#[async_trait]
pub trait ChangeUserInfoUseCase: Send + Sync {
    /// Change name and email, keeping the password
    async fn change_info(&self, command: ChangeUserInfoCommand) -> AppResult<()>;
}

#[async_trait]
pub trait ChangeUserPasswordUseCase: Send + Sync {
    /// Replace the password after checking the current one
    async fn change_password(&self, command: ChangeUserPasswordCommand) -> AppResult<()>;
}

#[async_trait]
pub trait LoginUseCase: Send + Sync {
    /// Check credentials and return the matching user
    async fn login(&self, command: LoginCommand) -> AppResult<UserDto>;
}

// =============================================================================
// Todo items
// =============================================================================

#[async_trait]
pub trait AddTodoUseCase: Send + Sync {
    /// Add a new, not yet done, item
    async fn add(&self, command: AddTodoCommand) -> AppResult<TodoItemDto>;
}

#[async_trait]
pub trait GetTodoUseCase: Send + Sync {
    /// Get an item by id; `None` when no such item exists
    async fn get(&self, todo_id: &str) -> AppResult<Option<TodoItemDto>>;
}

#[async_trait]
pub trait ListTodoUseCase: Send + Sync {
    /// List a user's items
    async fn list(&self, user_id: &str) -> AppResult<Vec<TodoItemDto>>;
}

#[async_trait]
pub trait UpdateTodoUseCase: Send + Sync {
    /// Change title and description of an item the caller owns
    async fn update(&self, command: UpdateTodoCommand) -> AppResult<()>;
}

#[async_trait]
pub trait CompleteTodoUseCase: Send + Sync {
    async fn complete(&self, user_id: &str, todo_id: &str) -> AppResult<()>;
}

#[async_trait]
pub trait UncompleteTodoUseCase: Send + Sync {
    async fn uncomplete(&self, user_id: &str, todo_id: &str) -> AppResult<()>;
}

#[async_trait]
pub trait DeleteTodoUseCase: Send + Sync {
    async fn delete(&self, user_id: &str, todo_id: &str) -> AppResult<()>;
}
