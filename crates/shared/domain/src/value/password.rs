use std::fmt;

use crate::constants::FIELD_PASSWORD;
use crate::error::InputResult;

use super::non_empty;

/// Password value. Holds plain text on the way in and the stored hash once
/// it reaches a [`User`](crate::User); the domain never checks strength.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

// Don't expose the secret in debug output
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Password").field(&"[REDACTED]").finish()
    }
}

impl Password {
    pub fn new(value: impl AsRef<str>) -> InputResult<Self> {
        non_empty(FIELD_PASSWORD, value.as_ref()).map(Self)
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}
