//! # yandex-cloud-dns
//!
//! A DNS record adapter for [Yandex Cloud DNS](https://yandex.cloud/en/services/dns),
//! authenticated with an IAM token.
//!
//! Records are listed, appended, replaced, merged and deleted in batches. Zones
//! may be referred to by DNS name or by Yandex Cloud zone ID; record names are
//! accepted relative to the zone or fully qualified and always returned
//! relative to it (`"@"` for the apex).
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation and Android targets.
//!
//! ## Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! yandex-cloud-dns = "0.1"
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use yandex_cloud_dns::{
//!     create_provider, Record, RecordAppender, RecordDeleter, RecordGetter, YandexCloudConfig,
//!     ZoneRef,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Create a provider from configuration
//!     let provider = create_provider(YandexCloudConfig {
//!         auth_api_token: std::env::var("IAM_TOKEN")?,
//!         ..Default::default()
//!     })?;
//!     let zone = ZoneRef::name("example.com.");
//!
//!     // 2. Add a record
//!     let challenge = Record::new("TXT", "_acme-challenge", "token", Duration::from_secs(60));
//!     let added = provider.append_records(&zone, &[challenge]).await?;
//!
//!     // 3. List the zone
//!     for record in provider.get_records(&zone).await? {
//!         println!("{} {} -> {}", record.name, record.record_type, record.value);
//!     }
//!
//!     // 4. Clean up
//!     provider.delete_records(&zone, &added).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError).
//! The error enum provides structured variants for common failure modes:
//!
//! - [`ProviderError::ApiError`] — the API rejected the request (status, body and a
//!   redacted request dump attached)
//! - [`ProviderError::ZoneNotFound`] / [`ProviderError::AmbiguousZone`] — zone lookup failed
//! - [`ProviderError::OperationFailed`] / [`ProviderError::OperationTimeout`] — the change
//!   operation did not complete
//! - [`ProviderError::NetworkError`] — network connectivity issue
//!
//! Nothing is retried automatically. See [`ProviderError`] for the full list.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::create_provider;

// Re-export record traits
pub use traits::{DnsProvider, RecordAppender, RecordDeleter, RecordGetter, RecordSetter};

// Re-export types
pub use types::{Record, YandexCloudConfig, ZoneInfo, ZoneRef};

// Re-export name helpers
pub use providers::common::{APEX, normalize_record_name};

// Re-export utils module
pub use utils::datetime;

// Re-export concrete provider
pub use providers::{YandexCloudProvider, YandexCloudProviderBuilder};
