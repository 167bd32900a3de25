//! Todo item use cases.
//!
//! Every mutation goes through [`load_owned`]: the item is loaded, must
//! exist, and must belong to the caller before anything is changed.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

use common::{AppResult, OptionExt};
use domain::{TodoItem, TodoItemDescription, TodoItemId, TodoItemTitle, UserId, ValidationError};

use crate::port::dto::{AddTodoCommand, TodoItemDto, UpdateTodoCommand};
use crate::port::usecase::{
    AddTodoUseCase, CompleteTodoUseCase, DeleteTodoUseCase, GetTodoUseCase, ListTodoUseCase,
    UncompleteTodoUseCase, UpdateTodoUseCase,
};
use crate::port::{CreateTodoCommand, TodoItemPersistence};

/// Load an item and check that `user_id` owns it.
///
/// Fails with `TodoNotFound` when the item is absent and `InvalidUser` when
/// someone else owns it.
async fn load_owned(
    todos: &dyn TodoItemPersistence,
    todo_id: &TodoItemId,
    user_id: &UserId,
) -> AppResult<TodoItem> {
    let item = todos
        .get(todo_id)
        .await?
        .ok_or_validation(ValidationError::TodoNotFound)?;

    ensure_owner(&item, user_id)?;
    Ok(item)
}

fn ensure_owner(item: &TodoItem, user_id: &UserId) -> AppResult<()> {
    if !item.is_owned_by(user_id) {
        warn!(
            todo_id = %item.id(),
            caller = %user_id,
            "Rejected access to todo item owned by another user"
        );
        return Err(ValidationError::InvalidUser.into());
    }
    Ok(())
}

// =============================================================================
// AddTodo
// =============================================================================

pub struct AddTodoService {
    todos: Arc<dyn TodoItemPersistence>,
}

impl AddTodoService {
    pub fn new(todos: Arc<dyn TodoItemPersistence>) -> Self {
        Self { todos }
    }
}

#[async_trait]
impl AddTodoUseCase for AddTodoService {
    async fn add(&self, command: AddTodoCommand) -> AppResult<TodoItemDto> {
        let command = CreateTodoCommand {
            user_id: UserId::new(&command.user_id)?,
            title: TodoItemTitle::new(&command.title)?,
            description: TodoItemDescription::new(&command.description)?,
        };

        let item = self.todos.create(command).await?;
        info!(todo_id = %item.id(), user_id = %item.user_id(), "Todo item created");

        Ok(TodoItemDto::from(&item))
    }
}

// =============================================================================
// GetTodo / ListTodo
// =============================================================================

pub struct GetTodoService {
    todos: Arc<dyn TodoItemPersistence>,
}

impl GetTodoService {
    pub fn new(todos: Arc<dyn TodoItemPersistence>) -> Self {
        Self { todos }
    }
}

#[async_trait]
impl GetTodoUseCase for GetTodoService {
    async fn get(&self, todo_id: &str) -> AppResult<Option<TodoItemDto>> {
        let todo_id = TodoItemId::new(todo_id)?;
        let item = self.todos.get(&todo_id).await?;
        debug!(todo_id = %todo_id, found = item.is_some(), "Looked up todo item");

        Ok(item.as_ref().map(TodoItemDto::from))
    }
}

pub struct ListTodoService {
    todos: Arc<dyn TodoItemPersistence>,
}

impl ListTodoService {
    pub fn new(todos: Arc<dyn TodoItemPersistence>) -> Self {
        Self { todos }
    }
}

#[async_trait]
impl ListTodoUseCase for ListTodoService {
    async fn list(&self, user_id: &str) -> AppResult<Vec<TodoItemDto>> {
        let user_id = UserId::new(user_id)?;
        let items = self.todos.list(&user_id).await?;

        Ok(items.iter().map(TodoItemDto::from).collect())
    }
}

// =============================================================================
// UpdateTodo
// =============================================================================

pub struct UpdateTodoService {
    todos: Arc<dyn TodoItemPersistence>,
}

impl UpdateTodoService {
    pub fn new(todos: Arc<dyn TodoItemPersistence>) -> Self {
        Self { todos }
    }
}

#[async_trait]
impl UpdateTodoUseCase for UpdateTodoService {
    async fn update(&self, command: UpdateTodoCommand) -> AppResult<()> {
        let todo_id = TodoItemId::new(&command.id)?;
        let user_id = UserId::new(&command.user_id)?;

        let mut item = self
            .todos
            .get(&todo_id)
            .await?
            .ok_or_validation(ValidationError::TodoNotFound)?;

        // Blank titles are rejected before the ownership check
        TodoItemTitle::new(&command.title)?;
        ensure_owner(&item, &user_id)?;

        item.change_title(&command.title)?;
        item.change_description(&command.description)?;

        self.todos.update(&item).await?;
        info!(todo_id = %todo_id, "Todo item updated");
        Ok(())
    }
}

// =============================================================================
// CompleteTodo / UncompleteTodo
// =============================================================================

pub struct CompleteTodoService {
    todos: Arc<dyn TodoItemPersistence>,
}

impl CompleteTodoService {
    pub fn new(todos: Arc<dyn TodoItemPersistence>) -> Self {
        Self { todos }
    }
}

#[async_trait]
impl CompleteTodoUseCase for CompleteTodoService {
    async fn complete(&self, user_id: &str, todo_id: &str) -> AppResult<()> {
        let todo_id = TodoItemId::new(todo_id)?;
        let user_id = UserId::new(user_id)?;

        let mut item = load_owned(self.todos.as_ref(), &todo_id, &user_id).await?;
        item.complete();

        self.todos.update(&item).await
    }
}

pub struct UncompleteTodoService {
    todos: Arc<dyn TodoItemPersistence>,
}

impl UncompleteTodoService {
    pub fn new(todos: Arc<dyn TodoItemPersistence>) -> Self {
        Self { todos }
    }
}

#[async_trait]
impl UncompleteTodoUseCase for UncompleteTodoService {
    async fn uncomplete(&self, user_id: &str, todo_id: &str) -> AppResult<()> {
        let todo_id = TodoItemId::new(todo_id)?;
        let user_id = UserId::new(user_id)?;

        let mut item = load_owned(self.todos.as_ref(), &todo_id, &user_id).await?;
        item.uncomplete();

        self.todos.update(&item).await
    }
}

// =============================================================================
// DeleteTodo
// =============================================================================

pub struct DeleteTodoService {
    todos: Arc<dyn TodoItemPersistence>,
}

impl DeleteTodoService {
    pub fn new(todos: Arc<dyn TodoItemPersistence>) -> Self {
        Self { todos }
    }
}

#[async_trait]
impl DeleteTodoUseCase for DeleteTodoService {
    async fn delete(&self, user_id: &str, todo_id: &str) -> AppResult<()> {
        let todo_id = TodoItemId::new(todo_id)?;
        let user_id = UserId::new(user_id)?;

        let item = load_owned(self.todos.as_ref(), &todo_id, &user_id).await?;
        self.todos.delete(item.id()).await?;

        info!(todo_id = %todo_id, "Todo item deleted");
        Ok(())
    }
}
