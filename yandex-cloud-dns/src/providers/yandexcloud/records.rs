//! Record <-> record set mapping

use crate::error::Result;
use crate::providers::common::{normalize_record_name, secs_to_ttl, ttl_to_secs};
use crate::types::Record;

use super::YandexCloudProvider;
use super::types::{WireRecordSet, WireTtl};

impl YandexCloudProvider {
    /// 通用记录 -> API 记录集（单值）
    pub(crate) fn to_wire_record(&self, record: &Record, zone_name: &str) -> Result<WireRecordSet> {
        let record_type = record.record_type.trim();
        if record_type.is_empty() {
            return Err(self.invalid_parameter("type", "record type is empty"));
        }

        Ok(WireRecordSet {
            id: String::new(),
            record_type: record_type.to_string(),
            name: normalize_record_name(&record.name, zone_name),
            data: vec![record.value.clone()],
            ttl: WireTtl(ttl_to_secs(record.ttl)),
        })
    }

    /// API 记录集 -> 通用记录，只读取 `data[0]`
    pub(crate) fn from_wire_record(&self, wire: WireRecordSet, zone_name: &str) -> Result<Record> {
        let Some(value) = wire.data.into_iter().next() else {
            return Err(self.malformed(format!(
                "record set '{}' ({}) has no data",
                wire.name, wire.record_type
            )));
        };

        Ok(Record {
            id: wire.id,
            record_type: wire.record_type,
            name: normalize_record_name(&wire.name, zone_name),
            value,
            ttl: secs_to_ttl(wire.ttl.0),
        })
    }
}

/// Whether `wire` carries the record `input` (same name, type and value).
fn same_identity(input: &Record, wire: &WireRecordSet, zone_name: &str) -> bool {
    normalize_record_name(&input.name, zone_name) == normalize_record_name(&wire.name, zone_name)
        && input.record_type.trim().eq_ignore_ascii_case(&wire.record_type)
        && wire.data.iter().any(|d| d == &input.value)
}

/// Pair each input with the result set that carries it.
///
/// Matched inputs take the ID, type and TTL reported by the API with the name
/// made relative to the zone. Inputs with no matching set come back unchanged.
pub(crate) fn match_results(inputs: &[Record], results: &[WireRecordSet], zone_name: &str) -> Vec<Record> {
    inputs
        .iter()
        .map(|input| {
            results
                .iter()
                .find(|wire| same_identity(input, wire, zone_name))
                .map_or_else(
                    || input.clone(),
                    |wire| Record {
                        id: wire.id.clone(),
                        record_type: wire.record_type.clone(),
                        name: normalize_record_name(&wire.name, zone_name),
                        value: input.value.clone(),
                        ttl: secs_to_ttl(wire.ttl.0),
                    },
                )
        })
        .collect()
}
