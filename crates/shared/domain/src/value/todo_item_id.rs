use std::fmt;

use crate::constants::FIELD_TODO_ITEM_ID;
use crate::error::InputResult;

use super::non_empty;

/// Identifier of a to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TodoItemId(String);

impl TodoItemId {
    pub fn new(value: impl AsRef<str>) -> InputResult<Self> {
        non_empty(FIELD_TODO_ITEM_ID, value.as_ref()).map(Self)
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for TodoItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
