//! Long-running operation polling

use tokio::time::{Instant, sleep};

use crate::error::{ProviderError, Result};

use super::YandexCloudProvider;
use super::types::{Operation, RecordSetDiff};

impl YandexCloudProvider {
    /// 等待操作完成，返回其结果
    ///
    /// An envelope that is already `done` is not polled again. A finished
    /// operation carrying `error` becomes `OperationFailed`.
    pub(crate) async fn wait_for_operation(&self, mut operation: Operation) -> Result<RecordSetDiff> {
        let started = Instant::now();

        while !operation.done {
            if operation.id.is_empty() {
                return Err(self.malformed("pending operation has no id"));
            }
            if started.elapsed() >= self.operation_timeout {
                return Err(ProviderError::OperationTimeout {
                    provider: self.provider_name().to_string(),
                    operation_id: operation.id,
                    waited_secs: started.elapsed().as_secs(),
                });
            }

            sleep(self.poll_interval).await;
            log::debug!(
                "[{}] Polling operation {} ({})",
                self.provider_name(),
                operation.id,
                operation.description
            );
            operation = self.get(&self.operation_url(&operation.id)).await?;
        }

        log::debug!(
            "[{}] Operation {} done (created {:?} by '{}', modified {:?})",
            self.provider_name(),
            operation.id,
            operation.created_at,
            operation.created_by,
            operation.modified_at
        );

        if let Some(error) = operation.error {
            let err = ProviderError::OperationFailed {
                provider: self.provider_name().to_string(),
                operation_id: operation.id,
                raw_code: error.code,
                message: error.message,
            };
            log::error!("{err}");
            return Err(err);
        }

        Ok(operation.response.unwrap_or_default())
    }
}
