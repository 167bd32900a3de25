//! In-memory stores.
//!
//! Process-local and lost on restart. Used for development and tests.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{Email, TodoItem, TodoItemId, User, UserId};

use crate::port::{CreateTodoCommand, CreateUserCommand, TodoItemPersistence, UserPersistence};

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn generated_id_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::internal(format!("Generated id rejected: {}", e))
}

// =============================================================================
// Todo items
// =============================================================================

#[derive(Default)]
pub struct MemoryTodoItemStore {
    items: RwLock<HashMap<TodoItemId, TodoItem>>,
}

impl MemoryTodoItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoItemPersistence for MemoryTodoItemStore {
    async fn create(&self, command: CreateTodoCommand) -> AppResult<TodoItem> {
        let id = TodoItemId::new(new_id()).map_err(generated_id_error)?;
        let item = TodoItem::new(
            id.clone(),
            command.title,
            command.description,
            false,
            command.user_id,
        );

        self.items.write().await.insert(id, item.clone());
        Ok(item)
    }

    async fn get(&self, id: &TodoItemId) -> AppResult<Option<TodoItem>> {
        Ok(self.items.read().await.get(id).cloned())
    }

    async fn list(&self, user_id: &UserId) -> AppResult<Vec<TodoItem>> {
        let items = self.items.read().await;
        Ok(items
            .values()
            .filter(|item| item.is_owned_by(user_id))
            .cloned()
            .collect())
    }

    async fn update(&self, item: &TodoItem) -> AppResult<()> {
        self.items
            .write()
            .await
            .insert(item.id().clone(), item.clone());
        Ok(())
    }

    async fn delete(&self, id: &TodoItemId) -> AppResult<()> {
        self.items.write().await.remove(id);
        Ok(())
    }
}

// =============================================================================
// Users
// =============================================================================

#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<UserId, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserPersistence for MemoryUserStore {
    async fn create(&self, command: CreateUserCommand) -> AppResult<User> {
        let id = UserId::new(new_id()).map_err(generated_id_error)?;
        let user = User::new(id.clone(), command.user_name, command.email, command.password);

        self.users.write().await.insert(id, user.clone());
        Ok(user)
    }

    async fn get_by_id(&self, id: &UserId) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn get_by_email(&self, email: &Email) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|user| user.email() == email).cloned())
    }

    async fn update(&self, user: &User) -> AppResult<()> {
        self.users
            .write()
            .await
            .insert(user.id().clone(), user.clone());
        Ok(())
    }
}
