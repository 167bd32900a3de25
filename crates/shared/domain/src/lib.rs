//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Value objects validate raw strings; entities are built from them and
//! expose only validated mutations.

pub mod constants;
pub mod entity;
pub mod error;
pub mod value;

pub use constants::*;
pub use entity::{TodoItem, User};
pub use error::{InputResult, InvalidInputError, ValidationError};
pub use value::{
    Email, Password, TodoItemDescription, TodoItemId, TodoItemTitle, UserId, UserName,
};
