//! Todo Service Library
//!
//! The application core (ports and use cases) together with the storage
//! and hashing adapters it runs on. Transport layers embed it through
//! [`build_application`].

pub mod application;
pub mod config;
pub mod hasher;
pub mod infra;
pub mod port;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;

pub use crate::application::{Application, ApplicationBuilder};
use crate::config::{StorageBackend, TodoServiceConfig};
use crate::hasher::Argon2PasswordHasher;
use crate::infra::Database;
use crate::repository::{MemoryTodoItemStore, MemoryUserStore, PgTodoItemStore, PgUserStore};

/// Build the application on the configured storage backend.
pub async fn build_application(config: &TodoServiceConfig) -> common::AppResult<Arc<Application>> {
    let builder = Application::builder().password_hasher(Arc::new(Argon2PasswordHasher::new()));

    let builder = match config.storage {
        StorageBackend::Memory => {
            info!("Using in-memory storage");
            builder
                .todo_persistence(Arc::new(MemoryTodoItemStore::new()))
                .user_persistence(Arc::new(MemoryUserStore::new()))
        }
        StorageBackend::Postgres => {
            let db = Database::connect(&config.database).await?;
            info!("Using PostgreSQL storage");
            builder
                .todo_persistence(Arc::new(PgTodoItemStore::new(db.get_connection())))
                .user_persistence(Arc::new(PgUserStore::new(db.get_connection())))
        }
    };

    Ok(Arc::new(builder.build()?))
}
