//! JSON response envelope shared by every HTTP response.
//!
//! ```json
//! { "status": true, "message": "user found", "data": { ... }, "errors": null }
//! ```

use std::collections::BTreeMap;

use serde::Serialize;

/// Response envelope with a success flag, message, optional data and
/// per-field error messages.
#[derive(Debug, Clone, Serialize)]
pub struct Payload<T> {
    pub status: bool,
    pub message: String,
    pub data: Option<T>,
    pub errors: Option<BTreeMap<String, String>>,
}

impl<T> Payload<T> {
    /// Successful response carrying data
    pub fn success(data: T) -> Self {
        Self {
            status: true,
            message: String::new(),
            data: Some(data),
            errors: None,
        }
    }

    /// Successful response without data
    pub fn empty() -> Self {
        Self {
            status: true,
            message: String::new(),
            data: None,
            errors: None,
        }
    }

    /// Failed response
    pub fn fail() -> Self {
        Self {
            status: false,
            message: String::new(),
            data: None,
            errors: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add an error entry; later entries with the same key win.
    pub fn with_error(mut self, key: impl Into<String>, message: impl Into<String>) -> Self {
        self.errors
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), message.into());
        self
    }
}
