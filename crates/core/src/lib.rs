//! # Slotbook Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The month cursor, availability resolver and grid builder
//! - The calendar controller state machine
//! - Port/adapter interfaces (traits)
//!
//! ## Architecture Principles
//! - Only depends on `slotbook-domain`
//! - No HTTP or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod availability;
pub mod controller;
pub mod cursor;
pub mod grid;
pub mod ports;

// Re-export specific items to avoid ambiguity
pub use availability::classify;
pub use controller::{CalendarController, CalendarSnapshot, CalendarState};
pub use cursor::DateCursor;
pub use grid::build_month_grid;
pub use ports::{BlockedDatesProvider, Clock};
