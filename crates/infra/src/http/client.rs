//! Retrying GET transport
//!
//! The scheduling service is only ever queried with plain GETs, so this
//! client exposes exactly that: a timeout, and bounded retries with
//! exponential backoff for server errors and transient transport failures.
//! Client errors (4xx) and the final server-error response are handed back
//! to the adapter, which owns the status-to-domain-error mapping.

use std::time::Duration;

use reqwest::{Client as ReqwestClient, Response};
use slotbook_domain::{ApiConfig, SlotbookError};
use tracing::debug;

use crate::errors::InfraError;

/// GET-only HTTP client with timeout and bounded retry.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    max_attempts: usize,
    base_backoff: Duration,
}

impl HttpClient {
    /// Build a client from API configuration. The configured base URL is not
    /// consumed here; adapters keep their own endpoint layout.
    pub fn new(config: &ApiConfig) -> Result<Self, SlotbookError> {
        let client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .no_proxy()
            .build()
            .map_err(|err| SlotbookError::from(InfraError::from(err)))?;

        Ok(Self {
            client,
            max_attempts: config.max_attempts.max(1),
            base_backoff: Duration::from_millis(config.retry_backoff_ms),
        })
    }

    /// GET `url`, retrying while the attempt budget lasts.
    ///
    /// Server errors (5xx) and transient transport failures are retried with
    /// backoff; the last 5xx response is returned rather than swallowed so
    /// the caller can map its status. Everything else returns immediately.
    pub async fn get(&self, url: &str) -> Result<Response, SlotbookError> {
        let mut attempt = 1_usize;
        loop {
            let out_of_budget = attempt >= self.max_attempts;
            match self.client.get(url).send().await {
                Ok(response) => {
                    let status = response.status();
                    debug!(%url, attempt, %status, "GET blocked-dates endpoint");
                    if !status.is_server_error() || out_of_budget {
                        return Ok(response);
                    }
                }
                Err(err) => {
                    debug!(%url, attempt, error = %err, "GET failed");
                    if out_of_budget || !is_transient(&err) {
                        return Err(InfraError::from(err).into());
                    }
                }
            }

            let delay = self.retry_delay(attempt);
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            attempt += 1;
        }
    }

    /// Backoff before the retry following `finished_attempts`, doubling per
    /// retry and capped at 256x the base.
    fn retry_delay(&self, finished_attempts: usize) -> Duration {
        let exponent = u32::try_from(finished_attempts.saturating_sub(1)).unwrap_or(8).min(8);
        self.base_backoff.saturating_mul(1_u32 << exponent)
    }
}

fn is_transient(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect() || err.is_request()
}
