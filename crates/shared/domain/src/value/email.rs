use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{EMAIL_PATTERN, FIELD_EMAIL};
use crate::error::{InputResult, InvalidInputError};

use super::non_empty;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Email address shaped `local@domain.tld`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn new(value: impl AsRef<str>) -> InputResult<Self> {
        let value = non_empty(FIELD_EMAIL, value.as_ref())?;
        if !EMAIL_RE.is_match(&value) {
            return Err(InvalidInputError::new(FIELD_EMAIL, "invalid email"));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
