//! Persistence adapters.
//!
//! * [`memory`] keeps everything in process memory.
//! * [`postgres`] stores rows through SeaORM.

pub mod entities;
mod memory;
mod postgres;

pub use memory::{MemoryTodoItemStore, MemoryUserStore};
pub use postgres::{PgTodoItemStore, PgUserStore};
