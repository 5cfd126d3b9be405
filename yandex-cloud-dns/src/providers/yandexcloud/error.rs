//! Yandex Cloud 错误构造
//!
//! Non-2xx responses carry a gRPC-style body `{"code": 5, "message": "..."}`.
//! The numeric code is kept as text in [`ProviderError::ApiError::raw_code`];
//! nothing here maps codes to finer variants.

use crate::error::ProviderError;
use crate::http_client::RawResponse;
use crate::utils::log_sanitizer::dump_request;

use super::YandexCloudProvider;
use super::types::ErrorResponse;

impl YandexCloudProvider {
    pub(crate) fn provider_name(&self) -> &'static str {
        "yandexcloud"
    }

    /// 将非 2xx 响应转换为 `ApiError`
    pub(crate) fn api_error(
        &self,
        method: &str,
        url: &str,
        body: Option<&str>,
        response: RawResponse,
    ) -> ProviderError {
        let (raw_code, raw_message) = match serde_json::from_str::<ErrorResponse>(&response.body)
        {
            Ok(parsed) => (
                parsed.code.map(|code| match code {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                }),
                parsed.message,
            ),
            Err(_) => (None, None),
        };

        ProviderError::ApiError {
            provider: self.provider_name().to_string(),
            status: response.status,
            status_text: response.status_text(),
            raw_code,
            raw_message,
            request: dump_request(method, url, body, &self.auth_api_token),
            response: response.body,
        }
    }

    pub(crate) fn malformed(&self, detail: impl Into<String>) -> ProviderError {
        ProviderError::MalformedResponse {
            provider: self.provider_name().to_string(),
            detail: detail.into(),
        }
    }

    pub(crate) fn invalid_parameter(&self, param: &str, detail: impl Into<String>) -> ProviderError {
        ProviderError::InvalidParameter {
            provider: self.provider_name().to_string(),
            param: param.to_string(),
            detail: detail.into(),
        }
    }

    pub(crate) fn zone_not_found(&self, zone: &str, raw_message: Option<String>) -> ProviderError {
        ProviderError::ZoneNotFound {
            provider: self.provider_name().to_string(),
            zone: zone.to_string(),
            raw_message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> YandexCloudProvider {
        YandexCloudProvider::new("t1.secret-token".to_string())
    }

    #[test]
    fn api_error_parses_numeric_code() {
        let err = provider().api_error(
            "GET",
            "https://dns.api.cloud.yandex.net/dns/v1/zones/dns1",
            None,
            RawResponse {
                status: 403,
                body: r#"{"code":7,"message":"Permission denied"}"#.to_string(),
            },
        );
        match err {
            ProviderError::ApiError {
                status,
                status_text,
                raw_code,
                raw_message,
                request,
                response,
                ..
            } => {
                assert_eq!(status, 403);
                assert_eq!(status_text, "Forbidden");
                assert_eq!(raw_code.as_deref(), Some("7"));
                assert_eq!(raw_message.as_deref(), Some("Permission denied"));
                assert!(request.starts_with("GET https://dns.api.cloud.yandex.net"));
                assert!(!request.contains("secret-token"));
                assert!(response.contains("Permission denied"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn api_error_keeps_unparseable_body() {
        let err = provider().api_error(
            "POST",
            "https://dns.api.cloud.yandex.net/dns/v1/zones/dns1:updateRecordSets",
            Some(r#"{"deletions":[],"additions":[]}"#),
            RawResponse {
                status: 502,
                body: "<html>bad gateway</html>".to_string(),
            },
        );
        match err {
            ProviderError::ApiError {
                raw_code,
                raw_message,
                request,
                response,
                ..
            } => {
                assert!(raw_code.is_none());
                assert!(raw_message.is_none());
                assert!(request.ends_with(r#"{"deletions":[],"additions":[]}"#));
                assert_eq!(response, "<html>bad gateway</html>");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
