//! Todo item database entity for SeaORM.

use sea_orm::entity::prelude::*;

use common::AppError;
use domain::{TodoItem, TodoItemDescription, TodoItemId, TodoItemTitle, UserId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "todo_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub description: String,
    pub is_done: bool,
    pub user_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Rows that no longer satisfy the value object rules are reported as
/// internal errors.
impl TryFrom<Model> for TodoItem {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let corrupt = |e: domain::InvalidInputError| {
            AppError::internal(format!("Corrupt todo_items row {}: {}", model.id, e))
        };

        Ok(TodoItem::new(
            TodoItemId::new(&model.id).map_err(corrupt)?,
            TodoItemTitle::new(&model.title).map_err(corrupt)?,
            TodoItemDescription::new(&model.description).map_err(corrupt)?,
            model.is_done,
            UserId::new(&model.user_id).map_err(corrupt)?,
        ))
    }
}
