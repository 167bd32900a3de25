//! Ports - the boundaries of the application core.
//!
//! * [`usecase`] and [`dto`] are driving ports: what transport adapters call.
//! * [`persistence`] and [`password`] are driven ports: what the core needs
//!   from storage and hashing. Adapters in [`crate::repository`] and
//!   [`crate::hasher`] implement them.

pub mod dto;
pub mod password;
pub mod persistence;
pub mod usecase;

pub use password::PasswordHasher;
pub use persistence::{CreateTodoCommand, CreateUserCommand, TodoItemPersistence, UserPersistence};

#[cfg(any(test, feature = "test-utils"))]
pub use password::MockPasswordHasher;
#[cfg(any(test, feature = "test-utils"))]
pub use persistence::{MockTodoItemPersistence, MockUserPersistence};
