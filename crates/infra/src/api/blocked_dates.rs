//! Blocked-dates API adapter
//!
//! Implements the core's `BlockedDatesProvider` port against the scheduling
//! service endpoint:
//!
//! ```text
//! GET {base_url}/users/{username}/blocked-dates?year=YYYY&month=M
//! ```
//!
//! An unknown username answers 404 and maps to `NotFound`; every other
//! non-success status and any transport failure maps to `Network`. The JSON
//! payload is validated into a `BlockedRuleSet` so out-of-range values are
//! rejected at the boundary, never inside the resolver.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use slotbook_core::ports::BlockedDatesProvider;
use slotbook_domain::{ApiConfig, BlockedRuleSet, Result, SlotbookError, Username};
use tracing::{debug, instrument};

use crate::errors::InfraError;
use crate::http::HttpClient;

/// Wire shape of the blocked-dates response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BlockedDatesResponse {
    blocked_week_days: Vec<u8>,
    blocked_dates: Vec<u8>,
}

/// HTTP implementation of [`BlockedDatesProvider`].
pub struct BlockedDatesApi {
    http: HttpClient,
    base_url: String,
}

impl BlockedDatesApi {
    /// Build an adapter from configuration.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = HttpClient::new(config)?;
        Ok(Self::with_client(http, config.base_url.clone()))
    }

    /// Build an adapter around an existing client, e.g. one shared across
    /// adapters.
    pub fn with_client(http: HttpClient, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { http, base_url }
    }
}

#[async_trait]
impl BlockedDatesProvider for BlockedDatesApi {
    #[instrument(skip(self), fields(user = %username))]
    async fn fetch_blocked_dates(
        &self,
        username: &Username,
        year: i32,
        month: u32,
    ) -> Result<BlockedRuleSet> {
        let url = format!(
            "{}/users/{}/blocked-dates?year={year}&month={month}",
            self.base_url, username
        );
        debug!(%url, "fetching blocked dates");

        let response = self.http.get(&url).await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(SlotbookError::NotFound(format!("unknown user: {username}")));
        }
        if !status.is_success() {
            return Err(SlotbookError::Network(format!(
                "blocked-dates request failed with status {status}"
            )));
        }

        let body: BlockedDatesResponse = response.json().await.map_err(|err| {
            let infra: InfraError = err.into();
            SlotbookError::from(infra)
        })?;

        BlockedRuleSet::new(year, month, body.blocked_week_days, body.blocked_dates)
    }
}
