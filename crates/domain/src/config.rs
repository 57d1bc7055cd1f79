//! Configuration management

use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotbookConfig {
    pub api: ApiConfig,
}

/// Blocked-dates API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the scheduling service, without a trailing slash.
    pub base_url: String,
    pub timeout_seconds: u64,
    /// Total attempts per request (initial try + retries).
    pub max_attempts: usize,
    /// Base delay between retries; doubles per retry.
    pub retry_backoff_ms: u64,
}

impl Default for SlotbookConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api".to_string(),
            timeout_seconds: 30,
            max_attempts: 3,
            retry_backoff_ms: 200,
        }
    }
}
