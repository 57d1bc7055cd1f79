//! # Slotbook Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The retrying HTTP client
//! - The blocked-dates API adapter
//! - The system clock
//!
//! ## Architecture
//! - Implements traits defined in `slotbook-core`
//! - Depends on `slotbook-domain` and `slotbook-core`
//! - Contains all "impure" code (network IO, wall-clock time)

pub mod api;
pub mod clock;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use api::BlockedDatesApi;
pub use clock::SystemClock;
pub use errors::InfraError;
pub use http::HttpClient;
