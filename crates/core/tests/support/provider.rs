use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use slotbook_core::ports::BlockedDatesProvider;
use slotbook_domain::{BlockedRuleSet, Result as DomainResult, SlotbookError, Username};
use tokio::sync::Notify;

/// In-memory mock for `BlockedDatesProvider`.
///
/// Stores a scripted response per (year, month) and records every fetch.
/// A month can additionally be gated behind a [`Notify`] so tests can hold a
/// fetch in flight while navigation continues, which is how the
/// last-navigation-wins race is exercised deterministically.
#[derive(Default)]
pub struct MockBlockedDatesProvider {
    responses: Mutex<HashMap<(i32, u32), DomainResult<BlockedRuleSet>>>,
    gates: Mutex<HashMap<(i32, u32), Arc<Notify>>>,
    calls: Mutex<Vec<(i32, u32)>>,
}

impl MockBlockedDatesProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful response carrying the given rule set.
    pub fn with_rules(self, rules: BlockedRuleSet) -> Self {
        let key = (rules.year(), rules.month());
        self.responses.lock().unwrap().insert(key, Ok(rules));
        self
    }

    /// Script a successful response with no blocked days at all.
    pub fn with_empty_month(self, year: i32, month: u32) -> Self {
        let rules = BlockedRuleSet::empty(year, month).unwrap();
        self.with_rules(rules)
    }

    /// Script a failure for the given month.
    pub fn with_failure(self, year: i32, month: u32, error: SlotbookError) -> Self {
        self.responses.lock().unwrap().insert((year, month), Err(error));
        self
    }

    /// Replace the scripted response for a month after construction.
    pub fn set_response(&self, year: i32, month: u32, response: DomainResult<BlockedRuleSet>) {
        self.responses.lock().unwrap().insert((year, month), response);
    }

    /// Install a gate for the given month; its fetch will not complete until
    /// the returned handle is notified.
    pub fn gate(&self, year: i32, month: u32) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.gates.lock().unwrap().insert((year, month), gate.clone());
        gate
    }

    /// Every (year, month) fetched so far, in call order.
    pub fn calls(&self) -> Vec<(i32, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BlockedDatesProvider for MockBlockedDatesProvider {
    async fn fetch_blocked_dates(
        &self,
        _username: &Username,
        year: i32,
        month: u32,
    ) -> DomainResult<BlockedRuleSet> {
        self.calls.lock().unwrap().push((year, month));

        let gate = self.gates.lock().unwrap().get(&(year, month)).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        self.responses.lock().unwrap().get(&(year, month)).cloned().unwrap_or_else(|| {
            Err(SlotbookError::NotFound(format!("no scripted response for {year}-{month:02}")))
        })
    }
}
