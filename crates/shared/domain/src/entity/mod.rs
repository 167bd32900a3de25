//! Entities - aggregates with a stable identity, built from value objects.

mod todo_item;
mod user;

pub use todo_item::TodoItem;
pub use user::User;
