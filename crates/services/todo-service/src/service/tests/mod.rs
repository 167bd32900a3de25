//! Service unit tests against mocked ports.

mod todo_service_tests;
mod user_service_tests;

use domain::{
    Email, Password, TodoItem, TodoItemDescription, TodoItemId, TodoItemTitle, User, UserId,
    UserName,
};

pub(super) const OWNER_ID: &str = "user-1";
pub(super) const OTHER_ID: &str = "user-2";
pub(super) const TODO_ID: &str = "todo-1";

pub(super) fn todo(id: &str, user_id: &str, is_done: bool) -> TodoItem {
    TodoItem::new(
        TodoItemId::new(id).unwrap(),
        TodoItemTitle::new("Buy milk").unwrap(),
        TodoItemDescription::new("Two litres").unwrap(),
        is_done,
        UserId::new(user_id).unwrap(),
    )
}

pub(super) fn user(id: &str, email: &str) -> User {
    User::new(
        UserId::new(id).unwrap(),
        UserName::new("Jane").unwrap(),
        Email::new(email).unwrap(),
        Password::new("hashed:secret").unwrap(),
    )
}
