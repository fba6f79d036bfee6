//! Shared HTTP client for the pipeline backend.

use std::time::Duration;

use reqwest::blocking::{Client, Response};

use super::error::ApiError;

pub(crate) const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
pub(crate) const HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Create a blocking client with timeout configuration so a slow or
/// unresponsive backend can never hang the board indefinitely.
/// - connect_timeout: maximum time to establish a TCP connection
/// - timeout: maximum time for the entire request
pub fn create_http_client() -> Result<Client, ApiError> {
    let client = Client::builder()
        .connect_timeout(Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS))
        .user_agent("slate-board")
        .build()?;
    Ok(client)
}

/// Map a non-2xx response to a status error.
pub(crate) fn validate_response_status(response: &Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
            reason: status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
        })
    }
}
