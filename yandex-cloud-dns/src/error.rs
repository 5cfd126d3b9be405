use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all DNS provider operations.
///
/// Each variant includes a `provider` field identifying which provider produced the error,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// Nothing in this crate retries. Batch operations are sent as a single request, so a
/// failure always means the whole batch was rejected.
///
/// # Transient Errors
///
/// The following variants usually succeed when the caller tries again:
/// - [`NetworkError`](Self::NetworkError) — network connectivity issues
/// - [`Timeout`](Self::Timeout) — request timed out
///
/// See [`is_transient`](Self::is_transient).
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, TLS, etc.).
    #[error("[{provider}] Network error: {detail}")]
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    #[error("[{provider}] Request timeout: {detail}")]
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The API answered with a status outside `200..300`.
    #[error("[{provider}] {status_text} ({status}){}", message_suffix(.raw_message))]
    ApiError {
        /// Provider that produced the error.
        provider: String,
        /// HTTP status code.
        status: u16,
        /// Canonical reason phrase for `status`.
        status_text: String,
        /// Error code from the API error body, if it could be parsed.
        raw_code: Option<String>,
        /// Error message from the API error body, if it could be parsed.
        raw_message: Option<String>,
        /// Dump of the failed request (method, URL, headers with the token redacted, body).
        request: String,
        /// Full response body.
        response: String,
    },

    /// More than one zone matches the requested name.
    #[error("[{provider}] Zone '{zone}' is ambiguous: {matches} zones match")]
    AmbiguousZone {
        /// Provider that produced the error.
        provider: String,
        /// Zone name that was queried.
        zone: String,
        /// Number of matching zones.
        matches: usize,
    },

    /// No zone matches the requested name or ID.
    #[error("[{provider}] Zone '{zone}' not found{}", message_suffix(.raw_message))]
    ZoneNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Zone name or ID that was queried.
        zone: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The API response could not be decoded (bad JSON, empty record data, non-numeric TTL).
    #[error("[{provider}] Malformed response: {detail}")]
    MalformedResponse {
        /// Provider that produced the error.
        provider: String,
        /// Details about the decode failure.
        detail: String,
    },

    /// A request parameter is invalid (e.g., empty record type, empty token).
    #[error("[{provider}] Invalid parameter '{param}': {detail}")]
    InvalidParameter {
        /// Provider that produced the error.
        provider: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// Failed to serialize a request body.
    #[error("[{provider}] Serialization error: {detail}")]
    SerializationError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the serialization failure.
        detail: String,
    },

    /// The long-running operation finished with an error.
    #[error("[{provider}] Operation '{operation_id}' failed: {message}")]
    OperationFailed {
        /// Provider that produced the error.
        provider: String,
        /// Operation identifier.
        operation_id: String,
        /// Status code reported by the operation, if any.
        raw_code: Option<i32>,
        /// Error message reported by the operation.
        message: String,
    },

    /// The long-running operation did not finish within the configured timeout.
    #[error("[{provider}] Operation '{operation_id}' not done after {waited_secs}s")]
    OperationTimeout {
        /// Provider that produced the error.
        provider: String,
        /// Operation identifier.
        operation_id: String,
        /// Seconds spent waiting.
        waited_secs: u64,
    },
}

fn message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .filter(|m| !m.is_empty())
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

impl ProviderError {
    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::AmbiguousZone { .. } | Self::ZoneNotFound { .. } | Self::InvalidParameter { .. }
        )
    }

    /// Whether the failure is a transport hiccup a caller-side retry may get past.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::NetworkError { .. } | Self::Timeout { .. })
    }

    /// HTTP status of an [`ApiError`](Self::ApiError).
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
