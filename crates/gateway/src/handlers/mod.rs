//! HTTP handlers.

mod auth_handler;
mod health_handler;
mod todo_handler;
mod user_handler;

pub use auth_handler::auth_routes;
pub use health_handler::health_routes;
pub use todo_handler::todo_routes;
pub use user_handler::{user_routes, UserData};
