//! Yandex Cloud DNS Provider

mod error;
mod http;
mod operation;
mod provider;
mod records;
/// Yandex Cloud API-specific request/response types.
pub(crate) mod types;
mod zone;

use std::time::Duration;

use reqwest::Client;

use crate::providers::common::create_http_client;
use crate::types::YandexCloudConfig;

/// Yandex Cloud DNS API base URL.
pub(crate) const DEFAULT_DNS_ENDPOINT: &str = "https://dns.api.cloud.yandex.net/dns/v1";
/// Yandex Cloud operations API base URL.
pub(crate) const DEFAULT_OPERATION_ENDPOINT: &str = "https://operation.api.cloud.yandex.net";
/// 默认操作轮询间隔
pub(crate) const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);
/// 默认操作等待上限
pub(crate) const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_secs(60);

/// Yandex Cloud DNS provider implementation.
///
/// Authenticates with an IAM token sent as a bearer credential.
///
/// # Construction
///
/// ```rust,no_run
/// use std::time::Duration;
/// use yandex_cloud_dns::YandexCloudProvider;
///
/// let provider = YandexCloudProvider::new("t1.9euelZq...".to_string());
///
/// let scoped = YandexCloudProvider::builder("t1.9euelZq...".to_string())
///     .folder_id("b1gexample")
///     .operation_timeout(Duration::from_secs(120))
///     .build();
/// ```
pub struct YandexCloudProvider {
    pub(crate) client: Client,
    pub(crate) auth_api_token: String,
    pub(crate) dns_endpoint: String,
    pub(crate) operation_endpoint: String,
    pub(crate) folder_id: Option<String>,
    pub(crate) poll_interval: Duration,
    pub(crate) operation_timeout: Duration,
}

/// Builder for [`YandexCloudProvider`].
pub struct YandexCloudProviderBuilder {
    auth_api_token: String,
    dns_endpoint: String,
    operation_endpoint: String,
    folder_id: Option<String>,
    poll_interval: Duration,
    operation_timeout: Duration,
}

impl YandexCloudProviderBuilder {
    fn new(auth_api_token: String) -> Self {
        Self {
            auth_api_token,
            dns_endpoint: DEFAULT_DNS_ENDPOINT.to_string(),
            operation_endpoint: DEFAULT_OPERATION_ENDPOINT.to_string(),
            folder_id: None,
            poll_interval: DEFAULT_POLL_INTERVAL,
            operation_timeout: DEFAULT_OPERATION_TIMEOUT,
        }
    }

    /// Override the DNS API base URL (trailing `/` is ignored).
    pub fn dns_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.dns_endpoint = trim_endpoint(endpoint.into());
        self
    }

    /// Override the operations API base URL (trailing `/` is ignored).
    pub fn operation_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.operation_endpoint = trim_endpoint(endpoint.into());
        self
    }

    /// Restrict zone-name lookups to a single folder.
    pub fn folder_id(mut self, folder_id: impl Into<String>) -> Self {
        self.folder_id = Some(folder_id.into());
        self
    }

    /// Delay between operation status polls (default: 1s).
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Upper bound on waiting for a change operation (default: 60s).
    pub fn operation_timeout(mut self, timeout: Duration) -> Self {
        self.operation_timeout = timeout;
        self
    }

    /// Build the [`YandexCloudProvider`] instance.
    pub fn build(self) -> YandexCloudProvider {
        YandexCloudProvider {
            client: create_http_client(),
            auth_api_token: self.auth_api_token,
            dns_endpoint: self.dns_endpoint,
            operation_endpoint: self.operation_endpoint,
            folder_id: self.folder_id,
            poll_interval: self.poll_interval,
            operation_timeout: self.operation_timeout,
        }
    }
}

fn trim_endpoint(endpoint: String) -> String {
    endpoint.trim_end_matches('/').to_string()
}

impl YandexCloudProvider {
    /// Creates a provider talking to the public endpoints with default polling.
    pub fn new(auth_api_token: String) -> Self {
        Self::builder(auth_api_token).build()
    }

    /// Returns a builder for customizing the provider configuration.
    pub fn builder(auth_api_token: String) -> YandexCloudProviderBuilder {
        YandexCloudProviderBuilder::new(auth_api_token)
    }

    /// 根据配置创建 Provider，未设置的字段使用默认值
    pub fn from_config(config: &YandexCloudConfig) -> Self {
        let mut builder = Self::builder(config.auth_api_token.clone());
        if let Some(endpoint) = &config.dns_endpoint {
            builder = builder.dns_endpoint(endpoint.as_str());
        }
        if let Some(endpoint) = &config.operation_endpoint {
            builder = builder.operation_endpoint(endpoint.as_str());
        }
        if let Some(folder_id) = &config.folder_id {
            builder = builder.folder_id(folder_id.as_str());
        }
        if let Some(ms) = config.poll_interval_ms {
            builder = builder.poll_interval(Duration::from_millis(ms));
        }
        if let Some(secs) = config.operation_timeout_secs {
            builder = builder.operation_timeout(Duration::from_secs(secs));
        }
        builder.build()
    }
}
