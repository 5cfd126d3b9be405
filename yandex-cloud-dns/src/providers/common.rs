//! Provider 公共工具函数

use std::time::Duration;

use reqwest::Client;

// ============ HTTP Client ============

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 创建带超时配置的 HTTP Client
pub fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .unwrap_or_else(|e| {
            log::warn!("Failed to build HTTP client with timeouts, using defaults: {e}");
            Client::new()
        })
}

// ============ 域名名称处理 ============

/// Marker for the zone apex in relative names.
pub const APEX: &str = "@";

/// 去掉域名末尾的点
pub fn normalize_domain_name(name: &str) -> String {
    name.trim_end_matches('.').to_string()
}

/// 将记录名称规范化为相对于区域的名称
///
/// 如: "test1.example.com." + "example.com" -> "test1"
/// 如: "test1" + "example.com." -> "test1"
/// 如: "example.com." + "example.com" -> "@"
///
/// The zone suffix only matches on a label boundary, and is removed until none
/// is left, which makes the function idempotent.
pub fn normalize_record_name(record_name: &str, zone_name: &str) -> String {
    let zone = normalize_domain_name(zone_name);
    let mut name = normalize_domain_name(record_name);

    if !zone.is_empty() {
        let label_suffix = format!(".{zone}");
        loop {
            if name == zone {
                name.clear();
                break;
            }
            match name.strip_suffix(&label_suffix) {
                Some(rest) => name = normalize_domain_name(rest),
                None => break,
            }
        }
    }

    let name = normalize_domain_name(&name);
    if name.is_empty() {
        APEX.to_string()
    } else {
        name
    }
}

// ============ TTL 转换 ============

/// `Duration` -> 整数秒（不足一秒的部分被舍去）
pub fn ttl_to_secs(ttl: Duration) -> u64 {
    ttl.as_secs()
}

/// 整数秒 -> `Duration`
pub fn secs_to_ttl(secs: u64) -> Duration {
    Duration::from_secs(secs)
}

/// 解析字符串形式的 TTL 秒数
pub fn parse_ttl_secs(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok()
}
