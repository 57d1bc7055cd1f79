//! Username value type
//!
//! Usernames identify the host whose blocked dates are fetched. The format
//! mirrors the claim-username rules of the booking page: at least three
//! characters, letters and hyphens only, stored lowercase.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SlotbookError};

/// A validated, lowercase username.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.chars().count() < 3 {
            return Err(SlotbookError::InvalidInput(
                "username must have at least 3 characters".to_string(),
            ));
        }
        if !trimmed.chars().all(|c| c.is_ascii_alphabetic() || c == '-') {
            return Err(SlotbookError::InvalidInput(
                "username may only contain letters and hyphens".to_string(),
            ));
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Username {
    type Error = SlotbookError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}
