//! Port interfaces implemented by the infrastructure layer

use async_trait::async_trait;
use chrono::NaiveDateTime;
use slotbook_domain::{BlockedRuleSet, Result, Username};

/// Source of per-month blocking rules.
///
/// Implementations own all network/IO concerns. An unknown username fails
/// with [`SlotbookError::NotFound`] and transport problems with
/// [`SlotbookError::Network`]; the controller folds both into its `Failed`
/// state without distinguishing causes.
///
/// [`SlotbookError::NotFound`]: slotbook_domain::SlotbookError::NotFound
/// [`SlotbookError::Network`]: slotbook_domain::SlotbookError::Network
#[async_trait]
pub trait BlockedDatesProvider: Send + Sync {
    /// Fetch the blocking rules for one (year, month), month being 1-based.
    async fn fetch_blocked_dates(
        &self,
        username: &Username,
        year: i32,
        month: u32,
    ) -> Result<BlockedRuleSet>;
}

/// Supplier of the evaluation instant used for past-day checks.
///
/// Injectable so tests can fix "now".
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}
