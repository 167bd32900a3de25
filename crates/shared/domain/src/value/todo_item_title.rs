use std::fmt;

use crate::constants::FIELD_TODO_ITEM_TITLE;
use crate::error::InputResult;

use super::non_empty;

/// Title of a to-do item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItemTitle(String);

impl TodoItemTitle {
    pub fn new(value: impl AsRef<str>) -> InputResult<Self> {
        non_empty(FIELD_TODO_ITEM_TITLE, value.as_ref()).map(Self)
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for TodoItemTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
