use crate::error::InputResult;
use crate::value::{TodoItemDescription, TodoItemId, TodoItemTitle, UserId};

/// A to-do item owned by exactly one user.
#[derive(Debug, Clone)]
pub struct TodoItem {
    id: TodoItemId,
    title: TodoItemTitle,
    description: TodoItemDescription,
    is_done: bool,
    user_id: UserId,
}

impl TodoItem {
    /// Assemble an item from already-validated parts
    pub fn new(
        id: TodoItemId,
        title: TodoItemTitle,
        description: TodoItemDescription,
        is_done: bool,
        user_id: UserId,
    ) -> Self {
        Self {
            id,
            title,
            description,
            is_done,
            user_id,
        }
    }

    pub fn id(&self) -> &TodoItemId {
        &self.id
    }

    pub fn title(&self) -> &TodoItemTitle {
        &self.title
    }

    pub fn description(&self) -> &TodoItemDescription {
        &self.description
    }

    pub fn is_done(&self) -> bool {
        self.is_done
    }

    /// Owner of this item
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Whether `user_id` owns this item
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    /// Same item iff identifiers match
    pub fn is(&self, other: &TodoItem) -> bool {
        self.id == other.id
    }

    pub fn complete(&mut self) {
        self.is_done = true;
    }

    pub fn uncomplete(&mut self) {
        self.is_done = false;
    }

    /// Replace the title; the current title is kept when `title` is invalid.
    pub fn change_title(&mut self, title: &str) -> InputResult<()> {
        self.title = TodoItemTitle::new(title)?;
        Ok(())
    }

    /// Replace the description; the current one is kept when invalid.
    pub fn change_description(&mut self, description: &str) -> InputResult<()> {
        self.description = TodoItemDescription::new(description)?;
        Ok(())
    }
}
