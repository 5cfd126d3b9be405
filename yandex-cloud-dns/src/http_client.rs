//! Generic HTTP client tools
//!
//! Reusable request execution and response parsing. The provider builds its own
//! `RequestBuilder` (URL, auth header, body); this module sends it, logs it and
//! turns transport failures and undecodable bodies into [`ProviderError`]s.
//!
//! Nothing here retries: every call is a single attempt.

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// Raw HTTP response: status code plus the whole body.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    /// Whether the status is in `200..300`.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Canonical reason phrase for the status (`"Not Found"` for 404).
    pub fn status_text(&self) -> String {
        StatusCode::from_u16(self.status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Unknown Status")
            .to_string()
    }
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status and response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `provider_name` - Provider name (for logging and errors)
    /// * `method_name` - request method name (for logs)
    /// * `url` - request URL (for logs)
    ///
    /// # Returns
    /// * `Ok(RawResponse)` - any HTTP status; callers decide what counts as failure
    /// * `Err(ProviderError::Timeout)` - the request timed out
    /// * `Err(ProviderError::NetworkError)` - connect/TLS/read failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<RawResponse, ProviderError> {
        log::debug!("[{provider_name}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status}");

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("[{provider_name}] Response Body: {}", truncate_for_log(&body));

        Ok(RawResponse { status, body })
    }

    /// Parse a JSON response body
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ProviderError::MalformedResponse)` - parsing failed (including
    ///   failures raised by custom field deserializers)
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] JSON parse failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::MalformedResponse {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }
}
