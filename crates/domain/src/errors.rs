//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Slotbook
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum SlotbookError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    /// Blocked dates for the month have not been fetched yet. This is a
    /// pending condition, not a failure; callers must treat the month as
    /// not-yet-renderable instead of defaulting to all-bookable.
    #[error("Blocked dates not loaded for {year}-{month:02}")]
    RulesUnavailable { year: i32, month: u32 },

    /// A rule set fetched for one month was handed to the resolver for a
    /// different month.
    #[error("Rules fetched for {rules_year}-{rules_month:02} cannot classify {target_year}-{target_month:02}")]
    MonthMismatch {
        rules_year: i32,
        rules_month: u32,
        target_year: i32,
        target_month: u32,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Slotbook operations
pub type Result<T> = std::result::Result<T, SlotbookError>;
