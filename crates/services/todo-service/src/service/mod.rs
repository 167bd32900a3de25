//! Application services layer - one service per use case.
//!
//! Services turn primitive commands into value objects, load aggregates
//! through the persistence ports, run the business checks and persist the
//! result. They own no state beyond their injected ports.

mod auth_service;
mod todo_service;
mod user_service;

pub use auth_service::LoginService;
pub use todo_service::{
    AddTodoService, CompleteTodoService, DeleteTodoService, GetTodoService, ListTodoService,
    UncompleteTodoService, UpdateTodoService,
};
pub use user_service::{
    AddUserService, ChangeUserInfoService, ChangeUserPasswordService, GetUserService,
};

#[cfg(test)]
mod tests;
