//! Provider factory functions.

use std::sync::Arc;

use crate::error::{ProviderError, Result};
use crate::providers::YandexCloudProvider;
use crate::traits::DnsProvider;
use crate::types::YandexCloudConfig;

/// Creates a [`DnsProvider`] instance from the given configuration.
///
/// The returned provider is wrapped in `Arc<dyn DnsProvider>` for easy sharing
/// across async tasks. Use [`YandexCloudProvider::from_config`] directly when
/// `merge_records` or the zone resolvers are needed.
///
/// # Errors
///
/// [`ProviderError::InvalidParameter`] when the token is blank or a timing
/// knob is zero.
///
/// # Examples
///
/// ```rust,no_run
/// use yandex_cloud_dns::{create_provider, DnsProvider, YandexCloudConfig};
///
/// let provider = create_provider(YandexCloudConfig {
///     auth_api_token: "t1.9euelZq...".to_string(),
///     ..Default::default()
/// }).unwrap();
/// assert_eq!(provider.id(), "yandexcloud");
/// ```
pub fn create_provider(config: YandexCloudConfig) -> Result<Arc<dyn DnsProvider>> {
    validate_config(&config)?;
    Ok(Arc::new(YandexCloudProvider::from_config(&config)))
}

fn validate_config(config: &YandexCloudConfig) -> Result<()> {
    let invalid = |param: &str, detail: &str| ProviderError::InvalidParameter {
        provider: "yandexcloud".to_string(),
        param: param.to_string(),
        detail: detail.to_string(),
    };

    if config.auth_api_token.trim().is_empty() {
        return Err(invalid("auth_api_token", "token is empty"));
    }
    if config.poll_interval_ms == Some(0) {
        return Err(invalid("poll_interval_ms", "must be greater than zero"));
    }
    if config.operation_timeout_secs == Some(0) {
        return Err(invalid("operation_timeout_secs", "must be greater than zero"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(token: &str) -> YandexCloudConfig {
        YandexCloudConfig {
            auth_api_token: token.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn creates_provider_from_token() {
        let provider = create_provider(config("t1.token")).unwrap();
        assert_eq!(provider.id(), "yandexcloud");
    }

    #[test]
    fn rejects_blank_token() {
        let err = create_provider(config("  ")).err().unwrap();
        assert!(
            matches!(err, ProviderError::InvalidParameter { ref param, .. } if param == "auth_api_token")
        );
        assert!(err.is_expected());
    }

    #[test]
    fn rejects_zero_poll_interval() {
        let mut c = config("t1.token");
        c.poll_interval_ms = Some(0);
        let err = create_provider(c).err().unwrap();
        assert!(
            matches!(err, ProviderError::InvalidParameter { ref param, .. } if param == "poll_interval_ms")
        );
    }
}
