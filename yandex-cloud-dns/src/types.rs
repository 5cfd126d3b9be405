use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::utils::log_sanitizer::REDACTED;

// ============ Record Types ============

/// A provider-agnostic DNS record.
///
/// Holds exactly one value; multi-value record sets are represented as several
/// `Record`s sharing the same name and type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Provider-assigned identifier. Empty when the provider does not assign one.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Record type (`"A"`, `"TXT"`, ...).
    #[serde(rename = "type")]
    pub record_type: String,
    /// Record name, relative to the zone (`"www"`, `"@"`) or fully qualified.
    pub name: String,
    /// Single record value (RDATA).
    pub value: String,
    /// Time to live.
    pub ttl: Duration,
}

impl Record {
    /// Create a record without a provider ID.
    pub fn new(
        record_type: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
        ttl: Duration,
    ) -> Self {
        Self {
            id: String::new(),
            record_type: record_type.into(),
            name: name.into(),
            value: value.into(),
            ttl,
        }
    }
}

// ============ Zone Types ============

/// How a caller refers to a zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "by", content = "value", rename_all = "lowercase")]
pub enum ZoneRef {
    /// Human-readable zone name, e.g. `"example.com."` (trailing dot optional).
    Name(String),
    /// Provider-assigned zone identifier.
    Id(String),
}

impl ZoneRef {
    /// Refer to a zone by its DNS name.
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Refer to a zone by its provider ID.
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }
}

impl fmt::Display for ZoneRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "{name}"),
            Self::Id(id) => write!(f, "id:{id}"),
        }
    }
}

/// A zone resolved against the provider: both identifiers known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneInfo {
    /// Provider-assigned zone identifier.
    pub id: String,
    /// Zone DNS name without the trailing dot (`"example.com"`).
    pub name: String,
    /// Folder the zone lives in, if reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
}

// ============ Configuration ============

/// Provider configuration as supplied by the embedding application.
///
/// Only `auth_api_token` is required; the rest fall back to the public
/// Yandex Cloud endpoints and the default polling behaviour.
///
/// ```
/// use yandex_cloud_dns::YandexCloudConfig;
///
/// let config: YandexCloudConfig =
///     serde_json::from_str(r#"{"auth_api_token": "t1.9euelZq..."}"#).unwrap();
/// assert!(config.folder_id.is_none());
/// ```
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct YandexCloudConfig {
    /// IAM token sent as `Authorization: Bearer <token>`.
    pub auth_api_token: String,
    /// Restrict zone-name lookups to one folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    /// Override for the DNS API base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_endpoint: Option<String>,
    /// Override for the operations API base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_endpoint: Option<String>,
    /// Delay between operation status polls, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll_interval_ms: Option<u64>,
    /// Upper bound on waiting for an operation, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_timeout_secs: Option<u64>,
}

impl fmt::Debug for YandexCloudConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YandexCloudConfig")
            .field("auth_api_token", &REDACTED)
            .field("folder_id", &self.folder_id)
            .field("dns_endpoint", &self.dns_endpoint)
            .field("operation_endpoint", &self.operation_endpoint)
            .field("poll_interval_ms", &self.poll_interval_ms)
            .field("operation_timeout_secs", &self.operation_timeout_secs)
            .finish()
    }
}
