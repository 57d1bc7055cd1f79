//! Shared test helpers for `slotbook-core` integration tests.
//!
//! These helpers provide reusable fixtures and lightweight mocks so that the
//! controller tests can focus on behaviour instead of boilerplate.

pub mod clock;
pub mod provider;
