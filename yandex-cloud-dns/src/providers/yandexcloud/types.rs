//! Yandex Cloud DNS API 类型定义

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::providers::common::parse_ttl_secs;

// ============ Zones ============

/// Response payload for `GET /zones`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListZonesResponse {
    #[serde(default)]
    pub dns_zones: Vec<DnsZone>,
    pub next_page_token: Option<String>,
}

/// Zone object returned by `GET /zones` and `GET /zones/{id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsZone {
    pub id: String,
    #[serde(default)]
    pub folder_id: Option<String>,
    /// DNS suffix of the zone, with trailing dot (`"example.com."`).
    #[serde(default)]
    pub zone: String,
    /// Resource name of the zone.
    #[serde(default)]
    pub name: String,
}

impl DnsZone {
    /// DNS name of the zone; falls back to the resource name when `zone` is absent.
    pub fn dns_name(&self) -> &str {
        if self.zone.is_empty() {
            &self.name
        } else {
            &self.zone
        }
    }
}

// ============ Record sets ============

/// TTL in whole seconds.
///
/// Written as a decimal string (the API's int64 JSON mapping); read from either
/// a JSON number or a numeric string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WireTtl(pub u64);

impl Serialize for WireTtl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for WireTtl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawTtl {
            Number(u64),
            Text(String),
        }

        match RawTtl::deserialize(deserializer)? {
            RawTtl::Number(secs) => Ok(Self(secs)),
            RawTtl::Text(text) => parse_ttl_secs(&text)
                .map(Self)
                .ok_or_else(|| de::Error::custom(format!("non-numeric ttl: {text:?}"))),
        }
    }
}

/// A record set as sent to and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireRecordSet {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    #[serde(default)]
    pub data: Vec<String>,
    #[serde(default)]
    pub ttl: WireTtl,
}

/// Response payload for `GET /zones/{id}:listRecordSets`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRecordSetsResponse {
    #[serde(default)]
    pub record_sets: Vec<WireRecordSet>,
    pub next_page_token: Option<String>,
}

// ============ Batch bodies ============

/// Which change a batch request carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchMethod {
    Add,
    Delete,
    Replace,
    Merge,
}

impl BatchMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Delete => "DELETE",
            Self::Replace => "REPLACE",
            Self::Merge => "MERGE",
        }
    }

    /// Custom method suffix of the endpoint handling this change.
    pub fn action(self) -> &'static str {
        match self {
            Self::Add | Self::Delete => "updateRecordSets",
            Self::Replace | Self::Merge => "upsertRecordSets",
        }
    }
}

/// Body of `POST /zones/{id}:updateRecordSets`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateRecordSetsBody {
    pub deletions: Vec<WireRecordSet>,
    pub additions: Vec<WireRecordSet>,
}

/// Body of `POST /zones/{id}:upsertRecordSets`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpsertRecordSetsBody {
    pub deletions: Vec<WireRecordSet>,
    pub replacements: Vec<WireRecordSet>,
    pub merges: Vec<WireRecordSet>,
}

/// A batch request body with exactly one slot filled.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RecordSetsRequest {
    Update(UpdateRecordSetsBody),
    Upsert(UpsertRecordSetsBody),
}

impl RecordSetsRequest {
    pub fn new(method: BatchMethod, records: Vec<WireRecordSet>) -> Self {
        match method {
            BatchMethod::Add => Self::Update(UpdateRecordSetsBody {
                additions: records,
                ..Default::default()
            }),
            BatchMethod::Delete => Self::Update(UpdateRecordSetsBody {
                deletions: records,
                ..Default::default()
            }),
            BatchMethod::Replace => Self::Upsert(UpsertRecordSetsBody {
                replacements: records,
                ..Default::default()
            }),
            BatchMethod::Merge => Self::Upsert(UpsertRecordSetsBody {
                merges: records,
                ..Default::default()
            }),
        }
    }
}

// ============ Operations ============

/// Result payload of a record-set change operation.
///
/// The request slot names are accepted alongside the API's `added`/`deleted`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordSetDiff {
    #[serde(default, alias = "added")]
    pub additions: Vec<WireRecordSet>,
    #[serde(default, alias = "deleted")]
    pub deletions: Vec<WireRecordSet>,
    #[serde(default)]
    pub replacements: Vec<WireRecordSet>,
    #[serde(default)]
    pub merges: Vec<WireRecordSet>,
}

impl RecordSetDiff {
    /// The slot holding the outcome of `method`.
    ///
    /// Replace and merge fall back to `additions` when their own slot is empty,
    /// since the API reports resulting record sets as `added`.
    pub fn slot(&self, method: BatchMethod) -> &[WireRecordSet] {
        match method {
            BatchMethod::Add => &self.additions,
            BatchMethod::Delete => &self.deletions,
            BatchMethod::Replace if !self.replacements.is_empty() => &self.replacements,
            BatchMethod::Merge if !self.merges.is_empty() => &self.merges,
            BatchMethod::Replace | BatchMethod::Merge => &self.additions,
        }
    }
}

/// Error attached to a finished operation.
#[derive(Debug, Clone, Deserialize)]
pub struct OperationError {
    #[serde(default)]
    pub code: Option<i32>,
    #[serde(default)]
    pub message: String,
}

/// Long-running operation envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "crate::utils::datetime::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_by: String,
    #[serde(default, deserialize_with = "crate::utils::datetime::deserialize")]
    pub modified_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub error: Option<OperationError>,
    #[serde(default)]
    pub response: Option<RecordSetDiff>,
}

/// Error payload returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub code: Option<serde_json::Value>,
    pub message: Option<String>,
}
