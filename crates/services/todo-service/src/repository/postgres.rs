//! SeaORM-backed stores.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use super::entities::todo_item::{self, Entity as TodoItemEntity};
use super::entities::user::{self, Entity as UserEntity};
use common::{AppError, AppResult};
use domain::{Email, TodoItem, TodoItemId, User, UserId};

use crate::port::{CreateTodoCommand, CreateUserCommand, TodoItemPersistence, UserPersistence};

// =============================================================================
// Todo items
// =============================================================================

/// Todo items in the `todo_items` table
pub struct PgTodoItemStore {
    db: DatabaseConnection,
}

impl PgTodoItemStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TodoItemPersistence for PgTodoItemStore {
    async fn create(&self, command: CreateTodoCommand) -> AppResult<TodoItem> {
        let active_model = todo_item::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            title: Set(command.title.into_string()),
            description: Set(command.description.into_string()),
            is_done: Set(false),
            user_id: Set(command.user_id.into_string()),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        TodoItem::try_from(model)
    }

    async fn get(&self, id: &TodoItemId) -> AppResult<Option<TodoItem>> {
        TodoItemEntity::find_by_id(id.value())
            .one(&self.db)
            .await
            .map_err(AppError::from)?
            .map(TodoItem::try_from)
            .transpose()
    }

    async fn list(&self, user_id: &UserId) -> AppResult<Vec<TodoItem>> {
        let models = TodoItemEntity::find()
            .filter(todo_item::Column::UserId.eq(user_id.value()))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        models.into_iter().map(TodoItem::try_from).collect()
    }

    async fn update(&self, item: &TodoItem) -> AppResult<()> {
        let active_model = todo_item::ActiveModel {
            id: Set(item.id().value().to_string()),
            title: Set(item.title().value().to_string()),
            description: Set(item.description().value().to_string()),
            is_done: Set(item.is_done()),
            user_id: Set(item.user_id().value().to_string()),
        };

        active_model.update(&self.db).await.map_err(AppError::from)?;
        Ok(())
    }

    async fn delete(&self, id: &TodoItemId) -> AppResult<()> {
        TodoItemEntity::delete_by_id(id.value())
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }
}

// =============================================================================
// Users
// =============================================================================

/// Users in the `users` table
pub struct PgUserStore {
    db: DatabaseConnection,
}

impl PgUserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserPersistence for PgUserStore {
    async fn create(&self, command: CreateUserCommand) -> AppResult<User> {
        let active_model = user::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            user_name: Set(command.user_name.into_string()),
            email: Set(command.email.into_string()),
            password: Set(command.password.into_string()),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        User::try_from(model)
    }

    async fn get_by_id(&self, id: &UserId) -> AppResult<Option<User>> {
        UserEntity::find_by_id(id.value())
            .one(&self.db)
            .await
            .map_err(AppError::from)?
            .map(User::try_from)
            .transpose()
    }

    async fn get_by_email(&self, email: &Email) -> AppResult<Option<User>> {
        UserEntity::find()
            .filter(user::Column::Email.eq(email.value()))
            .one(&self.db)
            .await
            .map_err(AppError::from)?
            .map(User::try_from)
            .transpose()
    }

    async fn update(&self, user: &User) -> AppResult<()> {
        let active_model = user::ActiveModel {
            id: Set(user.id().value().to_string()),
            user_name: Set(user.user_name().value().to_string()),
            email: Set(user.email().value().to_string()),
            password: Set(user.password().value().to_string()),
        };

        active_model.update(&self.db).await.map_err(AppError::from)?;
        Ok(())
    }
}
