//! DNS Provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

mod yandexcloud;

pub use yandexcloud::{YandexCloudProvider, YandexCloudProviderBuilder};
