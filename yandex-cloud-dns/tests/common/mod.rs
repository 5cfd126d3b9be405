//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::{Value, json};
use wiremock::matchers::{header, method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};
use yandex_cloud_dns::{
    DnsProvider, Record, RecordDeleter, RecordGetter, YandexCloudConfig, YandexCloudProvider,
    ZoneRef, create_provider,
};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 生成唯一的测试记录名称
pub fn generate_test_record_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}

/// 测试用 TXT 记录
pub fn txt(name: &str, value: &str) -> Record {
    Record::new("TXT", name, value, Duration::from_secs(120))
}

// ============ Live API ============

/// 测试上下文 - 封装 Provider 和测试区域
pub struct TestContext {
    pub provider: Arc<dyn DnsProvider>,
    pub zone_name: String,
    pub zone_id: Option<String>,
}

impl TestContext {
    /// 创建 Yandex Cloud 测试上下文
    ///
    /// Reads `IAM_TOKEN`, `ZONE_NAME` and, optionally, `ZONE_ID` and `FOLDER_ID`.
    pub fn yandexcloud() -> Option<Self> {
        let auth_api_token = env::var("IAM_TOKEN").ok()?;
        let zone_name = env::var("ZONE_NAME").ok()?;

        let config = YandexCloudConfig {
            auth_api_token,
            folder_id: env::var("FOLDER_ID").ok(),
            ..Default::default()
        };
        let provider = create_provider(config).ok()?;

        Some(Self {
            provider,
            zone_name,
            zone_id: env::var("ZONE_ID").ok(),
        })
    }

    pub fn zone(&self) -> ZoneRef {
        ZoneRef::name(self.zone_name.clone())
    }

    /// 查找并清理所有测试记录（以 _test- 开头的记录）
    pub async fn cleanup_all_test_records(&self) {
        let zone = self.zone();
        if let Ok(records) = self.provider.get_records(&zone).await {
            let leftovers: Vec<Record> = records
                .into_iter()
                .filter(|r| r.name.starts_with("_test-"))
                .collect();
            let _ = self.provider.delete_records(&zone, &leftovers).await;
        }
    }
}

// ============ Mock API ============

pub const TEST_TOKEN: &str = "t1.test-token";
pub const ZONE_ID: &str = "dns1zone";
pub const ZONE_NAME: &str = "example.com";

/// Provider pointed at `server`, polling fast.
pub fn mock_provider(server: &MockServer) -> YandexCloudProvider {
    YandexCloudProvider::builder(TEST_TOKEN.to_string())
        .dns_endpoint(format!("{}/dns/v1", server.uri()))
        .operation_endpoint(server.uri())
        .poll_interval(Duration::from_millis(10))
        .operation_timeout(Duration::from_millis(300))
        .build()
}

pub fn zone_json(id: &str, zone: &str) -> Value {
    json!({
        "id": id,
        "folderId": "b1gfolder",
        "createdAt": "2024-05-01T10:00:00Z",
        "name": zone.trim_end_matches('.').replace('.', "-"),
        "zone": zone,
        "publicVisibility": {}
    })
}

/// Serve `GET /zones?name=<ZONE_NAME>.` and `GET /zones/<ZONE_ID>` for the test zone.
pub async fn mount_zone(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/dns/v1/zones"))
        .and(header("Authorization", format!("Bearer {TEST_TOKEN}").as_str()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"dnsZones": [zone_json(ZONE_ID, "example.com.")]})),
        )
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/dns/v1/zones/{ZONE_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(zone_json(ZONE_ID, "example.com.")))
        .mount(server)
        .await;
}

/// Serve a zone lookup answering with exactly `zones`.
pub async fn mount_zone_lookup(server: &MockServer, name: &str, zones: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path("/dns/v1/zones"))
        .and(query_param("name", name))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "dnsZones": zones })))
        .mount(server)
        .await;
}

/// A finished operation envelope carrying `response`.
pub fn done_operation(id: &str, response: Value) -> Value {
    json!({
        "id": id,
        "description": "Update record sets",
        "createdAt": "2024-05-01T10:00:00Z",
        "createdBy": "ajetestuser",
        "modifiedAt": "2024-05-01T10:00:01Z",
        "done": true,
        "metadata": {"@type": "type.googleapis.com/yandex.cloud.dns.v1.UpdateRecordSetsMetadata"},
        "response": response
    })
}

/// A pending operation envelope.
pub fn pending_operation(id: &str) -> Value {
    json!({
        "id": id,
        "description": "Update record sets",
        "createdAt": "2024-05-01T10:00:00Z",
        "createdBy": "ajetestuser",
        "modifiedAt": "2024-05-01T10:00:00Z",
        "done": false
    })
}

/// 内存中的区域：按 Yandex Cloud 的方式存储记录集并应用批量变更
///
/// Names are stored fully qualified with a trailing dot, TTL as a string,
/// mirroring the live API.
#[derive(Clone)]
pub struct FakeZone {
    zone: String,
    sets: Arc<Mutex<Vec<Value>>>,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl FakeZone {
    pub fn new(zone: &str) -> Self {
        Self {
            zone: zone.trim_end_matches('.').to_string(),
            sets: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Current record sets.
    pub fn record_sets(&self) -> Vec<Value> {
        self.sets.lock().unwrap().clone()
    }

    /// Bodies of every change request received.
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }

    /// Mount the list and both batch endpoints for `zone_id`.
    pub async fn mount(&self, server: &MockServer, zone_id: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/dns/v1/zones/{zone_id}:listRecordSets")))
            .respond_with(self.clone())
            .mount(server)
            .await;
        Mock::given(method("POST"))
            .and(path_regex(format!(
                r"^/dns/v1/zones/{zone_id}:(update|upsert)RecordSets$"
            )))
            .and(header("Authorization", format!("Bearer {TEST_TOKEN}").as_str()))
            .respond_with(self.clone())
            .mount(server)
            .await;
    }

    fn fqdn(&self, name: &str) -> String {
        if name == "@" {
            format!("{}.", self.zone)
        } else if name.ends_with('.') {
            name.to_string()
        } else {
            format!("{name}.{}.", self.zone)
        }
    }

    fn canonical(&self, set: &Value) -> Value {
        let name = set["name"].as_str().unwrap_or_default();
        json!({
            "name": self.fqdn(name),
            "type": set["type"],
            "ttl": set["ttl"].as_str().map_or_else(|| set["ttl"].to_string(), str::to_string),
            "data": set["data"]
        })
    }

    fn position(sets: &[Value], wanted: &Value) -> Option<usize> {
        sets.iter()
            .position(|s| s["name"] == wanted["name"] && s["type"] == wanted["type"])
    }

    fn slot(body: &Value, name: &str) -> Vec<Value> {
        body[name].as_array().cloned().unwrap_or_default()
    }

    /// Apply one batch; nothing changes when any part of it is rejected.
    ///
    /// `additions` of a set that already exists fail the way the live ADD does.
    fn apply(&self, body: &Value) -> Result<Value, Value> {
        let mut guard = self.sets.lock().unwrap();
        let mut sets = guard.clone();
        let mut added = Vec::new();
        let mut deleted = Vec::new();

        for wanted in Self::slot(body, "deletions") {
            let wanted = self.canonical(&wanted);
            if let Some(i) = Self::position(&sets, &wanted) {
                deleted.push(sets.remove(i));
            }
        }
        for wanted in Self::slot(body, "replacements") {
            let wanted = self.canonical(&wanted);
            if let Some(i) = Self::position(&sets, &wanted) {
                deleted.push(sets.remove(i));
            }
            sets.push(wanted.clone());
            added.push(wanted);
        }
        for wanted in Self::slot(body, "additions") {
            let wanted = self.canonical(&wanted);
            if Self::position(&sets, &wanted).is_some() {
                return Err(json!({
                    "code": 6,
                    "message": format!(
                        "Record set {} {} already exists",
                        wanted["name"].as_str().unwrap_or_default(),
                        wanted["type"].as_str().unwrap_or_default()
                    )
                }));
            }
            sets.push(wanted.clone());
            added.push(wanted);
        }
        for wanted in Self::slot(body, "merges") {
            let wanted = self.canonical(&wanted);
            match Self::position(&sets, &wanted) {
                Some(i) => {
                    let mut data = sets[i]["data"].as_array().cloned().unwrap_or_default();
                    data.extend(wanted["data"].as_array().cloned().unwrap_or_default());
                    sets[i]["data"] = Value::Array(data);
                    added.push(sets[i].clone());
                }
                None => {
                    sets.push(wanted.clone());
                    added.push(wanted);
                }
            }
        }

        *guard = sets;
        Ok(json!({
            "@type": "type.googleapis.com/yandex.cloud.dns.v1.RecordSetDiff",
            "added": added,
            "deleted": deleted
        }))
    }
}

impl Respond for FakeZone {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        if request.url.path().ends_with(":listRecordSets") {
            return ResponseTemplate::new(200)
                .set_body_json(json!({ "recordSets": self.record_sets() }));
        }

        let Ok(body) = serde_json::from_slice::<Value>(&request.body) else {
            return ResponseTemplate::new(400)
                .set_body_json(json!({"code": 3, "message": "invalid JSON body"}));
        };
        self.requests.lock().unwrap().push(body.clone());
        match self.apply(&body) {
            Ok(diff) => {
                ResponseTemplate::new(200).set_body_json(done_operation("dnsop-fake", diff))
            }
            Err(error) => ResponseTemplate::new(400).set_body_json(error),
        }
    }
}
