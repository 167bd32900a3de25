use std::fmt;

use crate::constants::FIELD_USER_NAME;
use crate::error::InputResult;

use super::non_empty;

/// Display name of a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    pub fn new(value: impl AsRef<str>) -> InputResult<Self> {
        non_empty(FIELD_USER_NAME, value.as_ref()).map(Self)
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
