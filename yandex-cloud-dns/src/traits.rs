use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Record, ZoneRef};

/// Lists the records of a zone.
#[async_trait]
pub trait RecordGetter: Send + Sync {
    /// 获取区域内的全部记录
    ///
    /// Record names are returned relative to the zone (`"@"` for the apex).
    async fn get_records(&self, zone: &ZoneRef) -> Result<Vec<Record>>;
}

/// Adds records to a zone.
#[async_trait]
pub trait RecordAppender: Send + Sync {
    /// 追加记录，返回实际添加的记录（含 Provider 分配的 ID）
    async fn append_records(&self, zone: &ZoneRef, records: &[Record]) -> Result<Vec<Record>>;
}

/// Replaces the record sets named by the given records.
#[async_trait]
pub trait RecordSetter: Send + Sync {
    /// 设置记录：同名同类型的记录集被整体替换，不存在则创建
    async fn set_records(&self, zone: &ZoneRef, records: &[Record]) -> Result<Vec<Record>>;
}

/// Removes records from a zone.
#[async_trait]
pub trait RecordDeleter: Send + Sync {
    /// 删除记录，返回被删除的记录
    async fn delete_records(&self, zone: &ZoneRef, records: &[Record]) -> Result<Vec<Record>>;
}

/// DNS 提供商 Trait
///
/// Bundles the four record capabilities so a provider can be held as
/// `Arc<dyn DnsProvider>`.
pub trait DnsProvider: RecordGetter + RecordAppender + RecordSetter + RecordDeleter {
    /// 提供商标识符
    fn id(&self) -> &'static str;
}
