//! Yandex Cloud record trait 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::{DnsProvider, RecordAppender, RecordDeleter, RecordGetter, RecordSetter};
use crate::types::{Record, ZoneRef};

use super::YandexCloudProvider;
use super::records::match_results;
use super::types::{BatchMethod, ListRecordSetsResponse, Operation, RecordSetsRequest};

impl YandexCloudProvider {
    /// 批量提交一种变更，等待操作完成，并按内容匹配返回结果
    async fn apply_batch(
        &self,
        zone: &ZoneRef,
        records: &[Record],
        method: BatchMethod,
    ) -> Result<Vec<Record>> {
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let zone = self.resolve_zone(zone).await?;
        let wire = records
            .iter()
            .map(|r| self.to_wire_record(r, &zone.name))
            .collect::<Result<Vec<_>>>()?;

        log::info!(
            "[{}] {} {} record(s) in zone {}",
            self.provider_name(),
            method.as_str(),
            wire.len(),
            zone.name
        );

        let body = RecordSetsRequest::new(method, wire);
        let url = self.dns_url(&format!(
            "zones/{}:{}",
            urlencoding::encode(&zone.id),
            method.action()
        ));
        let operation: Operation = self.post(&url, &body).await?;
        let diff = self.wait_for_operation(operation).await?;

        if method == BatchMethod::Delete {
            return Ok(records.to_vec());
        }
        Ok(match_results(records, diff.slot(method), &zone.name))
    }

    /// Merge values into existing record sets, creating sets that do not exist.
    ///
    /// Returns the resulting records matched to the inputs.
    pub async fn merge_records(&self, zone: &ZoneRef, records: &[Record]) -> Result<Vec<Record>> {
        self.apply_batch(zone, records, BatchMethod::Merge).await
    }
}

#[async_trait]
impl RecordGetter for YandexCloudProvider {
    async fn get_records(&self, zone: &ZoneRef) -> Result<Vec<Record>> {
        let zone = self.resolve_zone(zone).await?;
        let url = self.dns_url(&format!(
            "zones/{}:listRecordSets",
            urlencoding::encode(&zone.id)
        ));
        let response: ListRecordSetsResponse = self.get(&url).await?;

        if response.next_page_token.as_deref().is_some_and(|t| !t.is_empty()) {
            log::warn!(
                "[{}] Record listing of {} is truncated; only the first page is returned",
                self.provider_name(),
                zone.name
            );
        }

        response
            .record_sets
            .into_iter()
            .map(|wire| self.from_wire_record(wire, &zone.name))
            .collect()
    }
}

#[async_trait]
impl RecordAppender for YandexCloudProvider {
    async fn append_records(&self, zone: &ZoneRef, records: &[Record]) -> Result<Vec<Record>> {
        self.apply_batch(zone, records, BatchMethod::Add).await
    }
}

#[async_trait]
impl RecordSetter for YandexCloudProvider {
    async fn set_records(&self, zone: &ZoneRef, records: &[Record]) -> Result<Vec<Record>> {
        self.apply_batch(zone, records, BatchMethod::Replace).await
    }
}

#[async_trait]
impl RecordDeleter for YandexCloudProvider {
    async fn delete_records(&self, zone: &ZoneRef, records: &[Record]) -> Result<Vec<Record>> {
        self.apply_batch(zone, records, BatchMethod::Delete).await
    }
}

impl DnsProvider for YandexCloudProvider {
    fn id(&self) -> &'static str {
        self.provider_name()
    }
}
