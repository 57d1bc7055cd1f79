//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use slotbook_domain::SlotbookError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub SlotbookError);

impl From<InfraError> for SlotbookError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<SlotbookError> for InfraError {
    fn from(value: SlotbookError) -> Self {
        InfraError(value)
    }
}

impl From<HttpError> for InfraError {
    fn from(err: HttpError) -> Self {
        let error = if err.is_timeout() {
            SlotbookError::Network(format!("http request timed out: {err}"))
        } else if err.is_connect() {
            SlotbookError::Network(format!("http connection failed: {err}"))
        } else if err.is_decode() {
            SlotbookError::Internal(format!("failed to decode http response: {err}"))
        } else if err.is_builder() {
            SlotbookError::Internal(format!("failed to build http request: {err}"))
        } else {
            SlotbookError::Network(format!("http error: {err}"))
        };
        InfraError(error)
    }
}
