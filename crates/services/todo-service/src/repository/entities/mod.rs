//! SeaORM entities.

pub mod todo_item;
pub mod user;
