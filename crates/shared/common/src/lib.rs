//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - The tagged application error and its HTTP mapping
//! - The JSON response envelope
//! - Configuration structures

pub mod config;
pub mod error;
pub mod payload;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
pub use payload::Payload;
