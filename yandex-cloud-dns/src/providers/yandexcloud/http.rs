//! Yandex Cloud HTTP 请求方法

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::{HttpUtils, RawResponse};

use super::YandexCloudProvider;

impl YandexCloudProvider {
    // ==================== 辅助方法 ====================

    /// 发送请求，不检查状态码
    async fn send(&self, method: &str, url: &str, payload: Option<&str>) -> Result<RawResponse> {
        let request = match payload {
            Some(payload) => self
                .client
                .post(url)
                .header(CONTENT_TYPE, "application/json")
                .body(payload.to_string()),
            None => self.client.get(url),
        }
        .header(AUTHORIZATION, format!("Bearer {}", self.auth_api_token));

        HttpUtils::execute_request(request, self.provider_name(), method, url).await
    }

    /// 非 2xx 转为 `ApiError`，否则解析 JSON
    fn decode<T: DeserializeOwned>(
        &self,
        method: &str,
        url: &str,
        payload: Option<&str>,
        response: RawResponse,
    ) -> Result<T> {
        if !response.is_success() {
            let err = self.api_error(method, url, payload, response);
            log::error!("{err}");
            return Err(err);
        }
        HttpUtils::parse_json(&response.body, self.provider_name())
    }

    // ==================== 公开 API 方法 ====================

    /// 执行 GET 请求，返回原始响应（由调用方判断状态码）
    pub(crate) async fn get_raw(&self, url: &str) -> Result<RawResponse> {
        self.send("GET", url, None).await
    }

    /// 执行 GET 请求
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.get_raw(url).await?;
        self.decode("GET", url, None, response)
    }

    /// 执行 POST 请求
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T> {
        let payload =
            serde_json::to_string(body).map_err(|e| ProviderError::SerializationError {
                provider: self.provider_name().to_string(),
                detail: e.to_string(),
            })?;

        log::debug!("Request Body: {payload}");

        let response = self.send("POST", url, Some(&payload)).await?;
        self.decode("POST", url, Some(&payload), response)
    }

    /// `{dns_endpoint}/{path}`
    pub(crate) fn dns_url(&self, path: &str) -> String {
        format!("{}/{path}", self.dns_endpoint)
    }

    /// `{operation_endpoint}/operations/{id}`
    pub(crate) fn operation_url(&self, operation_id: &str) -> String {
        format!("{}/operations/{operation_id}", self.operation_endpoint)
    }
}
