use std::fmt;

use crate::constants::FIELD_TODO_ITEM_DESCRIPTION;
use crate::error::InputResult;

use super::non_empty;

/// Free-text description of a to-do item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItemDescription(String);

impl TodoItemDescription {
    pub fn new(value: impl AsRef<str>) -> InputResult<Self> {
        non_empty(FIELD_TODO_ITEM_DESCRIPTION, value.as_ref()).map(Self)
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for TodoItemDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
