//! Zone name <-> ID resolution

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::providers::common::normalize_domain_name;
use crate::types::{ZoneInfo, ZoneRef};

use super::YandexCloudProvider;
use super::types::{DnsZone, ErrorResponse, ListZonesResponse};

/// Whether `zone` answers to `query` by DNS name or resource name.
fn zone_matches(zone: &DnsZone, query: &str) -> bool {
    normalize_domain_name(&zone.zone) == query || normalize_domain_name(&zone.name) == query
}

impl YandexCloudProvider {
    /// 根据区域名称查找区域
    async fn find_zone_by_name(&self, zone_name: &str) -> Result<DnsZone> {
        let query = normalize_domain_name(zone_name.trim());
        if query.is_empty() {
            return Err(self.invalid_parameter("zone", "zone name is empty"));
        }

        let mut url = format!(
            "{}?name={}",
            self.dns_url("zones"),
            urlencoding::encode(&query)
        );
        if let Some(folder_id) = &self.folder_id {
            url.push_str("&folderId=");
            url.push_str(&urlencoding::encode(folder_id));
        }

        let response: ListZonesResponse = self.get(&url).await?;
        if response.next_page_token.as_deref().is_some_and(|t| !t.is_empty()) {
            log::warn!(
                "[{}] Zone listing for '{query}' has more pages; only the first is checked",
                self.provider_name()
            );
        }

        let mut matches: Vec<DnsZone> = response
            .dns_zones
            .into_iter()
            .filter(|z| zone_matches(z, &query))
            .collect();

        match matches.len() {
            0 => Err(self.zone_not_found(&query, None)),
            1 => Ok(matches.remove(0)),
            n => Err(ProviderError::AmbiguousZone {
                provider: self.provider_name().to_string(),
                zone: query,
                matches: n,
            }),
        }
    }

    /// 根据区域 ID 获取区域；404 视为区域不存在
    async fn find_zone_by_id(&self, zone_id: &str) -> Result<DnsZone> {
        let zone_id = zone_id.trim();
        if zone_id.is_empty() {
            return Err(self.invalid_parameter("zone", "zone id is empty"));
        }

        let url = self.dns_url(&format!("zones/{}", urlencoding::encode(zone_id)));
        let response = self.get_raw(&url).await?;
        if response.status == 404 {
            let raw_message = serde_json::from_str::<ErrorResponse>(&response.body)
                .ok()
                .and_then(|e| e.message);
            return Err(self.zone_not_found(zone_id, raw_message));
        }
        if !response.is_success() {
            return Err(self.api_error("GET", &url, None, response));
        }
        HttpUtils::parse_json(&response.body, self.provider_name())
    }

    /// Look up the ID of the zone named `zone_name` (trailing dot optional).
    ///
    /// # Errors
    /// `ZoneNotFound` when nothing matches, `AmbiguousZone` when several zones do.
    pub async fn resolve_zone_id(&self, zone_name: &str) -> Result<String> {
        Ok(self.find_zone_by_name(zone_name).await?.id)
    }

    /// Look up the DNS name (without trailing dot) of the zone with ID `zone_id`.
    ///
    /// # Errors
    /// `ZoneNotFound` when the API answers 404.
    pub async fn resolve_zone_name(&self, zone_id: &str) -> Result<String> {
        let zone = self.find_zone_by_id(zone_id).await?;
        Ok(normalize_domain_name(zone.dns_name()))
    }

    /// Resolve either form of [`ZoneRef`] into a full [`ZoneInfo`].
    pub async fn resolve_zone(&self, zone: &ZoneRef) -> Result<ZoneInfo> {
        let found = match zone {
            ZoneRef::Name(name) => self.find_zone_by_name(name).await?,
            ZoneRef::Id(id) => self.find_zone_by_id(id).await?,
        };
        let info = ZoneInfo {
            name: normalize_domain_name(found.dns_name()),
            id: found.id,
            folder_id: found.folder_id,
        };
        log::debug!(
            "[{}] Resolved zone {zone} -> {} ({})",
            self.provider_name(),
            info.name,
            info.id
        );
        Ok(info)
    }
}
